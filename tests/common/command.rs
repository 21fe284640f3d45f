use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// An initialized repository with one committed file (`1.txt` = "one")
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));

    run_jot_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    run_jot_command(repository_dir.path(), &["commit", "Initial tracked file"])
        .assert()
        .success();

    repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.envs(vec![("NO_PAGER", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Read the tip digest of a branch straight from its ref file
pub fn read_branch_tip(dir: &Path, branch: &str) -> String {
    let ref_path = dir
        .join(".jot")
        .join("refs")
        .join("heads")
        .join(branch);
    std::fs::read_to_string(ref_path)
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}

/// Name of the branch HEAD currently points to
pub fn read_current_branch(dir: &Path) -> String {
    let head = std::fs::read_to_string(dir.join(".jot").join("HEAD"))
        .expect("Failed to read HEAD");
    head.trim()
        .strip_prefix("ref: refs/heads/")
        .expect("Malformed HEAD")
        .to_string()
}

/// Count the object files stored in the object database
pub fn count_objects(dir: &Path) -> usize {
    walkdir_files(&dir.join(".jot").join("objects"))
}

fn walkdir_files(root: &Path) -> usize {
    let mut count = 0;
    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                count += walkdir_files(&path);
            } else {
                count += 1;
            }
        }
    }
    count
}
