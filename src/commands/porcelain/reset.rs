use crate::areas::repository::Repository;
use crate::artifacts::errors::Result;

impl Repository {
    /// Move the current branch's tip to an arbitrary commit
    ///
    /// Works like a branch checkout — same untracked-file guard, same
    /// working-tree swap, staging cleared — except the current branch itself
    /// is repointed instead of switching branches.
    pub fn reset(&self, commit_id: &str) -> Result<()> {
        let (target_oid, target) = self.resolve_commit_id(commit_id)?;
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

        self.refs().update_head(&target_oid)?;

        Ok(())
    }
}
