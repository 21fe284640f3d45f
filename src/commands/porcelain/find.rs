use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};

impl Repository {
    /// Print the ids of every commit whose message equals `message` exactly
    ///
    /// Searches the same global commit set as `global-log`, so commits left
    /// behind by branch deletion or reset are found as long as some branch
    /// still reaches them. Output is newest first.
    pub fn find(&self, message: &str) -> Result<()> {
        let matches = self
            .all_commits()?
            .into_iter()
            .filter(|(_, commit)| commit.message() == message)
            .collect::<Vec<_>>();

        if matches.is_empty() {
            return Err(Error::NoCommitWithMessage);
        }

        for (oid, _) in matches {
            writeln!(self.writer(), "{}", oid)?;
        }

        Ok(())
    }
}
