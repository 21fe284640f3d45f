use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{METADATA_DIR, Workspace};
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::objects::commit::{Commit, SlimCommit};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeSet;
use std::path::Path;

/// Repository orchestrator
///
/// Owns the four areas and is the only component allowed to mutate the
/// staging area and the current branch. Every operation is a method on this
/// type (spread across `commands/porcelain`), threading state explicitly
/// instead of keeping any process-wide globals.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    index: RefCell<Index>,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;
        let metadata_root = path.join(METADATA_DIR);

        let database = Database::new(metadata_root.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_root.clone().into_boxed_path());
        let index = Index::new(metadata_root.join("index").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
            index: RefCell::new(index),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_root(&self) -> std::path::PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_root().is_dir()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Borrow the staging area mutably
    ///
    /// Callers must not hold the borrow across a call to another repository
    /// operation; each operation manages its own borrow.
    pub fn index_mut(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// Load the commit HEAD points to
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        let head_oid = self
            .refs
            .read_head()?
            .context("HEAD does not point to any commit")?;
        self.load_commit(&head_oid)
    }

    /// Load a commit by its full digest
    pub fn load_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(oid)?
            .with_context(|| format!("Commit object not found: {}", oid))
    }

    /// Load the slim form of a commit for graph traversal
    pub fn load_slim_commit(&self, oid: &ObjectId) -> anyhow::Result<SlimCommit> {
        Ok(self.load_commit(oid)?.slim())
    }

    /// Resolve a full or abbreviated commit id
    ///
    /// Full 40-character ids are looked up directly; shorter ones (at least
    /// 2 characters) go through the shard scan. Exactly one match must
    /// remain, and it must be a commit.
    pub fn resolve_commit_id(&self, commit_id: &str) -> Result<(ObjectId, Commit)> {
        let oid = if commit_id.len() == crate::artifacts::objects::OBJECT_ID_LENGTH {
            ObjectId::try_parse(commit_id.to_string()).map_err(|_| Error::CommitNotFound)?
        } else {
            let mut matches = self.database.find_objects_by_prefix(commit_id)?;
            match matches.len() {
                0 => return Err(Error::CommitNotFound),
                1 => matches.remove(0),
                _ => return Err(Error::AmbiguousPrefix(commit_id.to_string())),
            }
        };

        if !self.database.exists(&oid) {
            return Err(Error::CommitNotFound);
        }

        let commit = self
            .database
            .parse_object_as_commit(&oid)?
            .ok_or(Error::CommitNotFound)?;

        Ok((oid, commit))
    }

    /// Working-directory files the engine knows nothing about
    ///
    /// A file is untracked when it exists on disk and is neither staged for
    /// addition nor tracked by the HEAD commit — or when it is staged for
    /// removal but was re-created on disk behind the engine's back.
    pub fn untracked_files(&self, index: &Index, head: &Commit) -> anyhow::Result<BTreeSet<String>> {
        Ok(self
            .workspace
            .list_file_names()?
            .into_iter()
            .filter(|file_name| {
                (!index.is_staged_for_addition(file_name) && !head.tracks(file_name))
                    || index.is_staged_for_removal(file_name)
            })
            .collect())
    }

    /// Abort when any of `target_files` would clobber an untracked file
    ///
    /// Checked before any filesystem mutation, so the calling operation is
    /// all-or-nothing from the user's perspective.
    pub fn guard_untracked<'a>(
        &self,
        untracked: &BTreeSet<String>,
        mut target_files: impl Iterator<Item = &'a String>,
    ) -> Result<()> {
        if target_files.any(|file_name| untracked.contains(file_name)) {
            return Err(Error::UntrackedFileInTheWay);
        }

        Ok(())
    }

    /// Write one file from a commit into the working directory
    pub fn restore_file(&self, commit: &Commit, file_name: &str) -> Result<()> {
        let blob_digest = commit
            .blob_digest(file_name)
            .ok_or(Error::FileNotInCommit)?;
        let blob = self
            .database
            .parse_object_as_blob(blob_digest)?
            .with_context(|| format!("Blob object not found: {}", blob_digest))?;

        self.workspace.write_file(file_name, blob.content())?;
        Ok(())
    }

    /// Swap the working directory from one commit's file set to another's
    ///
    /// Deletes every file tracked by `from`, then writes out every file of
    /// `to`. Callers run the untracked guard first.
    pub fn replace_working_tree(&self, from: &Commit, to: &Commit) -> Result<()> {
        for file_name in from.file_table().keys() {
            self.workspace.remove_file(file_name)?;
        }
        for file_name in to.file_table().keys() {
            self.restore_file(to, file_name)?;
        }

        Ok(())
    }
}
