use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::command::{count_objects, init_repository_dir, run_jot_command};
use common::file::{FileSpec, write_file};

#[rstest]
fn add_stages_a_new_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n2.txt"));
}

#[rstest]
fn add_of_a_missing_file_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["add", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist."));
}

#[rstest]
fn add_of_unchanged_tracked_content_stages_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    // 1.txt is already committed with this exact content
    run_jot_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn re_adding_unchanged_content_is_idempotent(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();
    let objects_after_first_add = count_objects(dir.path());

    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();

    // no new blob, still staged exactly once
    assert_eq!(count_objects(dir.path()), objects_after_first_add);
    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n2.txt\n\n"));
}

#[rstest]
fn reverting_a_file_to_head_content_cancels_the_pending_add(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("1.txt"), "edited".to_string()));
    run_jot_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    // revert to the committed content, then add again: the round trip cancels
    write_file(FileSpec::new(dir.path().join("1.txt"), "one".to_string()));
    run_jot_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}

#[rstest]
fn rm_without_a_reason_fails_and_changes_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));

    run_jot_command(dir.path(), &["rm", "2.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No reason to remove the file."));

    // the working copy is untouched and nothing was staged
    assert!(dir.path().join("2.txt").is_file());
    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"));
}

#[rstest]
fn rm_of_a_staged_only_file_just_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("2.txt"), "two".to_string()));
    run_jot_command(dir.path(), &["add", "2.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["rm", "2.txt"])
        .assert()
        .success();

    // unstaged, not deleted, not staged for removal
    assert!(dir.path().join("2.txt").is_file());
    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"));
}

#[rstest]
fn rm_of_a_tracked_file_stages_the_removal_and_deletes_the_working_copy(
    init_repository_dir: TempDir,
) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    assert!(!dir.path().join("1.txt").exists());
    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n1.txt"));
}

#[rstest]
fn adding_a_recreated_file_cancels_its_pending_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    run_jot_command(dir.path(), &["rm", "1.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("1.txt"), "one".to_string()));
    run_jot_command(dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    run_jot_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"))
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"));
}
