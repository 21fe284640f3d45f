use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, run_jot_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn clean_repository_prints_all_sections_empty(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Branches ===\n*master\n\n"))
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"))
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n",
        ))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));
}

#[rstest]
fn other_branches_are_listed_after_the_starred_current_one(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Branches ===\n*master\nfeature\n\n",
        ));
}

#[rstest]
fn staged_and_removed_sections_reflect_the_index(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n2.txt\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n1.txt\n\n"));
}

#[rstest]
fn unstaged_edits_to_tracked_files_show_as_modifications(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "edited behind the engine's back".to_string(),
    ));

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n1.txt\n\n",
        ));
}

#[rstest]
fn deleted_tracked_files_show_as_modifications(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    std::fs::remove_file(dir.path().join("1.txt")).unwrap();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n1.txt\n\n",
        ));
}

#[rstest]
fn staged_files_that_drifted_on_disk_show_as_modifications(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("2.txt"),
        "drifted after staging".to_string(),
    ));

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Modifications Not Staged For Commit ===\n2.txt\n\n",
        ));
}

#[rstest]
fn unknown_files_are_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(
        dir.path().join("mystery.txt"),
        "who wrote this".to_string(),
    ));

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Untracked Files ===\nmystery.txt\n\n"));
}

#[rstest]
fn recreated_files_staged_for_removal_are_untracked(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(
        dir.path().join("1.txt"),
        "recreated by hand".to_string(),
    ));

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Untracked Files ===\n1.txt\n\n"));
}
