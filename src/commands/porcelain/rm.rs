use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};

impl Repository {
    /// Stage a file for removal
    ///
    /// A pending addition is simply unstaged. A HEAD-tracked file is staged
    /// for removal and its working copy deleted if still present. Both can
    /// apply to one call. A file that is neither gives the command no reason
    /// to act.
    pub fn rm(&self, file_name: &str) -> Result<()> {
        let head = self.head_commit()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let staged = index.is_staged_for_addition(file_name);
        let tracked = head.tracks(file_name);

        if !staged && !tracked {
            return Err(Error::NoReasonToRemove);
        }

        if staged {
            index.unstage(file_name);
        }

        if tracked {
            index.stage_remove(file_name);
            self.workspace().remove_file(file_name)?;
        }

        index.write_updates()?;

        Ok(())
    }
}
