use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};

impl Repository {
    /// Switch to another branch
    ///
    /// The untracked-file guard runs against the target commit's full file
    /// set before anything is touched. On success the working directory is
    /// swapped to the target's file set, the staging area is cleared and
    /// HEAD is repointed.
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        if !self.refs().branch_exists(branch_name) {
            return Err(Error::NoSuchBranch);
        }
        if branch_name == self.refs().current_branch_name()? {
            return Err(Error::CheckoutCurrentBranch);
        }

        let target_oid = self
            .refs()
            .read_ref(branch_name)?
            .ok_or(Error::NoSuchBranch)?;
        let target = self.load_commit(&target_oid)?;
        let head = self.head_commit()?;

        {
            let mut index = self.index_mut();
            index.rehydrate()?;
            let untracked = self.untracked_files(&index, &head)?;
            self.guard_untracked(&untracked, target.file_table().keys())?;
        }

        self.replace_working_tree(&head, &target)?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()?;
        drop(index);

        self.refs().set_head_branch(branch_name)?;

        Ok(())
    }

    /// Restore one file from the HEAD commit
    pub fn checkout_file(&self, file_name: &str) -> Result<()> {
        let head = self.head_commit()?;

        if !head.tracks(file_name) {
            return Err(Error::FileNotInCommit);
        }

        self.restore_file(&head, file_name)?;
        self.unstage_restored_file(file_name)?;

        Ok(())
    }

    /// Restore one file from an explicit (possibly abbreviated) commit
    pub fn checkout_file_from_commit(&self, commit_id: &str, file_name: &str) -> Result<()> {
        let (_, commit) = self.resolve_commit_id(commit_id)?;

        if !commit.tracks(file_name) {
            return Err(Error::FileNotInCommit);
        }

        self.restore_file(&commit, file_name)?;
        self.unstage_restored_file(file_name)?;

        Ok(())
    }

    /// A restored file is no longer pending addition
    fn unstage_restored_file(&self, file_name: &str) -> Result<()> {
        let mut index = self.index_mut();
        index.rehydrate()?;

        if index.unstage(file_name) {
            index.write_updates()?;
        }

        Ok(())
    }
}
