use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};

impl Repository {
    /// Delete a branch pointer
    ///
    /// Only the ref file goes away; the commits it pointed to stay in the
    /// object database.
    pub fn rm_branch(&self, branch_name: &str) -> Result<()> {
        if !self.refs().branch_exists(branch_name) {
            return Err(Error::BranchNotFound);
        }
        if branch_name == self.refs().current_branch_name()? {
            return Err(Error::RemoveCurrentBranch);
        }

        self.refs().delete_branch(branch_name)?;

        Ok(())
    }
}
