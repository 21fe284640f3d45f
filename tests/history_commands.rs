use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, read_branch_tip, run_jot_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn log_walks_first_parents_back_to_the_initial_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", "Second commit"])
        .assert()
        .success();

    let output = run_jot_command(dir.path(), &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();

    // newest first, initial commit last
    let second = output.find("Second commit").unwrap();
    let first = output.find("Initial tracked file").unwrap();
    let initial = output.find("initial commit").unwrap();
    assert!(second < first);
    assert!(first < initial);
    assert!(output.contains("Date: "));
}

#[rstest]
fn log_does_not_follow_second_parents(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // build a side branch with its own commit, merge it, then log
    run_jot_command(dir.path(), &["branch", "side"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("side.txt"),
        "side".to_string(),
    ));
    run_jot_command(dir.path(), &["add", "side.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", "Side-only commit"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", "Master commit"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["merge", "side"])
        .assert()
        .success();

    // the side branch's commit is reachable only through the second parent,
    // so log must not show it
    run_jot_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged side into master."))
        .stdout(predicate::str::contains("Master commit"))
        .stdout(predicate::str::contains("Side-only commit").not());
}

#[rstest]
fn global_log_reaches_commits_on_every_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["checkout", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("feature.txt"),
        "feature".to_string(),
    ));
    run_jot_command(dir.path(), &["add", "feature.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", "Feature-only commit"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["global-log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feature-only commit"))
        .stdout(predicate::str::contains("Initial tracked file"))
        .stdout(predicate::str::contains("initial commit"));
}

#[rstest]
fn find_prints_every_commit_with_the_exact_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["commit", "Needle"])
        .assert()
        .success();
    let needle_tip = read_branch_tip(dir.path(), "master");

    run_jot_command(dir.path(), &["find", "Needle"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&needle_tip));

    // exact equality, not substring matching
    run_jot_command(dir.path(), &["find", "Needl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found no commit with that message."));
}

#[rstest]
fn find_without_a_match_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["find", "No such message anywhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found no commit with that message."));
}
