use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{init_repository_dir, read_branch_tip, run_jot_command};

#[rstest]
fn branch_points_at_the_current_head_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(
        read_branch_tip(dir.path(), "feature"),
        read_branch_tip(dir.path(), "master")
    );

    // creating a branch does not switch to it
    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*master"))
        .stdout(predicate::str::contains("feature"));
}

#[rstest]
fn duplicate_branch_names_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "feature"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["branch", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}

#[rstest]
fn invalid_branch_names_are_rejected(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "bad..name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name."));
}

#[rstest]
fn rm_branch_of_a_missing_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["rm-branch", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}

#[rstest]
fn rm_branch_of_the_current_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the current branch."));
}

#[rstest]
fn rm_branch_deletes_only_the_pointer(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["branch", "doomed"])
        .assert()
        .success();
    run_jot_command(dir.path(), &["rm-branch", "doomed"])
        .assert()
        .success();

    assert!(!dir
        .path()
        .join(".jot")
        .join("refs")
        .join("heads")
        .join("doomed")
        .exists());

    // history reachable from master is untouched
    run_jot_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial tracked file"));
}
