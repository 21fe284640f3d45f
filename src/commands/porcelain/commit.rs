use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Commit the staged changes
    pub fn commit(&self, message: &str) -> Result<()> {
        {
            let mut index = self.index_mut();
            index.rehydrate()?;
            if index.is_empty() {
                return Err(Error::NothingStaged);
            }
        }
        if message.is_empty() {
            return Err(Error::EmptyCommitMessage);
        }

        self.commit_staged(message, None)?;

        Ok(())
    }

    /// Reconcile the staging area into a new commit and advance the branch
    ///
    /// Shared by `commit` and `merge`: builds the next commit from HEAD and
    /// the staged changes, persists it, clears the staging area and moves
    /// the current branch's tip (and with it HEAD). Merge commits pass the
    /// given tip as second parent and skip the emptiness checks — a merge
    /// that stages nothing still commits.
    pub(crate) fn commit_staged(
        &self,
        message: &str,
        second_parent: Option<ObjectId>,
    ) -> Result<ObjectId> {
        let head = self.head_commit()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let mut commit = head.build_next(index.added(), index.removed(), message);
        if let Some(second_parent) = second_parent {
            commit = commit.with_second_parent(second_parent);
        }

        self.database().store(&commit)?;
        let commit_digest = commit.digest();

        index.clear();
        index.write_updates()?;
        drop(index);

        self.refs().update_head(&commit_digest)?;

        Ok(commit_digest)
    }
}
