use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::merge::ancestor::AncestorFinder;
use crate::artifacts::merge::resolution::{MergeCase, classify, conflict_artifact};
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::collections::BTreeSet;

impl Repository {
    /// Merge another branch into the current one
    ///
    /// Finds the merge base, short-circuits the two fast-forward shapes,
    /// then classifies every involved file against (base, current, given)
    /// and applies the resolution through the checkout/add/rm primitives.
    /// Divergent edits produce a conflict artifact and a warning, never an
    /// abort: the merge commit is created regardless.
    pub fn merge(&self, given_branch: &str) -> Result<()> {
        if !self.refs().branch_exists(given_branch) {
            return Err(Error::BranchNotFound);
        }
        let current_branch = self.refs().current_branch_name()?;
        if given_branch == current_branch {
            return Err(Error::MergeWithSelf);
        }
        {
            let mut index = self.index_mut();
            index.rehydrate()?;
            if !index.is_empty() {
                return Err(Error::UncommittedChanges);
            }
        }

        let current_oid = self.refs().read_head()?.ok_or(Error::NoCommitsExist)?;
        let given_oid = self
            .refs()
            .read_ref(given_branch)?
            .ok_or(Error::BranchNotFound)?;

        let finder = AncestorFinder::new(|oid| self.load_slim_commit(oid));
        let base_oid = finder
            .find_merge_base(&current_oid, &given_oid)?
            .context("No common ancestor between the two branches")?;

        if base_oid == given_oid {
            return Err(Error::GivenBranchIsAncestor);
        }
        if base_oid == current_oid {
            // nothing to reconcile: adopt the given tip wholesale
            self.checkout_branch(given_branch)?;
            self.refs().set_head_branch(&current_branch)?;
            self.refs().update_head(&given_oid)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(());
        }

        let current = self.load_commit(&current_oid)?;
        let given = self.load_commit(&given_oid)?;
        let base = self.load_commit(&base_oid)?;

        {
            let mut index = self.index_mut();
            index.rehydrate()?;
            let untracked = self.untracked_files(&index, &current)?;
            self.guard_untracked(
                &untracked,
                current
                    .file_table()
                    .keys()
                    .chain(given.file_table().keys())
                    .chain(base.file_table().keys()),
            )?;
        }

        let involved_files = current
            .file_table()
            .keys()
            .chain(given.file_table().keys())
            .chain(base.file_table().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let mut conflicted = false;
        for file_name in &involved_files {
            let base_digest = base.blob_digest(file_name);
            let current_digest = current.blob_digest(file_name);
            let given_digest = given.blob_digest(file_name);

            match classify(base_digest, current_digest, given_digest) {
                None => {}
                Some(MergeCase::GivenModified | MergeCase::GivenAdded) => {
                    self.restore_file(&given, file_name)?;
                    self.add(file_name)?;
                }
                Some(MergeCase::GivenDeleted) => {
                    self.rm(file_name)?;
                }
                Some(
                    MergeCase::CurrentModified
                    | MergeCase::CurrentDeleted
                    | MergeCase::CurrentAdded,
                ) => {}
                Some(MergeCase::BothModified) => {
                    if current_digest != given_digest {
                        self.write_conflict(file_name, &current, &given)?;
                        conflicted = true;
                    }
                }
            }
        }

        let message = format!("Merged {} into {}.", given_branch, current_branch);
        self.commit_staged(&message, Some(given_oid))?;

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(())
    }

    /// Write a conflict artifact for one file and stage it
    fn write_conflict(&self, file_name: &str, current: &Commit, given: &Commit) -> Result<()> {
        let current_content = self.tracked_content(current, file_name)?;
        let given_content = self.tracked_content(given, file_name)?;

        let rendered = conflict_artifact(current_content.as_deref(), given_content.as_deref());
        self.workspace().write_file(file_name, &rendered)?;
        self.add(file_name)?;

        Ok(())
    }

    /// Content of a file as one commit tracks it, if it does
    fn tracked_content(&self, commit: &Commit, file_name: &str) -> Result<Option<String>> {
        let Some(blob_digest) = commit.blob_digest(file_name) else {
            return Ok(None);
        };

        let blob = self
            .database()
            .parse_object_as_blob(blob_digest)?
            .with_context(|| format!("Blob object not found: {}", blob_digest))?;

        Ok(Some(blob.content().to_string()))
    }
}
