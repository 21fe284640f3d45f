use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

impl Repository {
    /// Print the current branch's history
    ///
    /// Walks first-parent edges only, from HEAD back to the initial commit;
    /// a merge's second parent is shown on the `Merge:` line but never
    /// followed.
    pub fn log(&self) -> Result<()> {
        let head_oid = self.refs().read_head()?.ok_or(Error::NoCommitsExist)?;

        let mut current_oid = Some(head_oid);
        while let Some(oid) = current_oid {
            let commit = self.load_commit(&oid)?;
            self.print_commit(&oid, &commit)?;
            current_oid = commit.parent().cloned();
        }

        Ok(())
    }

    /// Print one commit in the fixed log format
    pub(crate) fn print_commit(&self, oid: &ObjectId, commit: &Commit) -> Result<()> {
        writeln!(self.writer(), "===")?;
        writeln!(self.writer(), "commit {}", oid)?;

        if let (Some(first), Some(second)) = (commit.parent(), commit.second_parent()) {
            writeln!(
                self.writer(),
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            )?;
        }

        writeln!(self.writer(), "Date: {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "{}", commit.message())?;
        writeln!(self.writer())?;

        Ok(())
    }
}
