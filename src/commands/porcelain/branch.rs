use crate::areas::repository::Repository;
use crate::artifacts::branch::BranchName;
use crate::artifacts::errors::{Error, Result};

impl Repository {
    /// Create a branch pointing at HEAD's current commit
    ///
    /// The new branch is not checked out.
    pub fn branch(&self, branch_name: &str) -> Result<()> {
        let branch_name = BranchName::try_parse(branch_name)?;

        if self.refs().branch_exists(branch_name.as_ref()) {
            return Err(Error::BranchAlreadyExists);
        }

        let head_oid = self.refs().read_head()?.ok_or(Error::NoCommitsExist)?;
        self.refs().update_ref(branch_name.as_ref(), &head_oid)?;

        Ok(())
    }
}
