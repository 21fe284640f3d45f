//! References (branches and HEAD)
//!
//! A branch is a file under `refs/heads/` whose content is the branch's tip
//! digest. HEAD is a file containing `ref: refs/heads/<branch>` naming the
//! current branch; it always aliases a branch, never a bare commit.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing the HEAD symref
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Reference manager
///
/// Reads and writes branch refs and the HEAD pointer under the metadata
/// root. Ref writes take an exclusive advisory lock on the ref file.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata root (`.jot`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    /// Name of the branch HEAD currently points to
    pub fn current_branch_name(&self) -> anyhow::Result<String> {
        let content = std::fs::read_to_string(self.head_path())
            .context("Unable to read the HEAD pointer")?;
        let content = content.trim();

        let captures = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .with_context(|| format!("Malformed HEAD pointer: {}", content))?;

        Ok(captures[1].to_string())
    }

    /// Point HEAD at a branch
    pub fn set_head_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        self.write_ref_file(
            self.head_path(),
            format!("ref: refs/heads/{}", branch_name),
        )
    }

    /// Read the current branch's tip digest
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref(&self.current_branch_name()?)
    }

    /// Move the current branch's tip
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        let branch_name = self.current_branch_name()?;
        self.update_ref(&branch_name, oid)
    }

    pub fn branch_exists(&self, branch_name: &str) -> bool {
        self.heads_path().join(branch_name).is_file()
    }

    /// Read a branch's tip digest
    pub fn read_ref(&self, branch_name: &str) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.heads_path().join(branch_name);

        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("Unable to read ref file {}", ref_path.display()))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    /// Create or move a branch ref
    pub fn update_ref(&self, branch_name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        let ref_path = self.heads_path().join(branch_name).into_boxed_path();
        self.write_ref_file(ref_path, oid.as_ref().to_string())
    }

    pub fn delete_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let ref_path = self.heads_path().join(branch_name);

        std::fs::remove_file(&ref_path)
            .with_context(|| format!("Unable to delete branch file {}", ref_path.display()))
    }

    /// All branch names, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let mut branch_names = WalkDir::new(self.heads_path())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();

        branch_names.sort();
        Ok(branch_names)
    }

    fn write_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("Invalid ref file path {}", path.display())
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.clone())
            .with_context(|| format!("Unable to open ref file {}", path.display()))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }
}
