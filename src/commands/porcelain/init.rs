use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use anyhow::Context;
use std::fs;

/// Name of the branch every repository starts on
pub const DEFAULT_BRANCH: &str = "master";

impl Repository {
    /// Initialize the metadata root
    ///
    /// Creates the directory layout, persists the universal initial commit,
    /// points a fresh default branch at it and aims HEAD there. Because the
    /// initial commit hashes identically everywhere, every new repository
    /// starts from the same object.
    pub fn init(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create the objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create the refs directory")?;

        let initial_commit = Commit::initial();
        self.database().store(&initial_commit)?;

        self.refs()
            .update_ref(DEFAULT_BRANCH, &initial_commit.digest())?;
        self.refs().set_head_branch(DEFAULT_BRANCH)?;

        // write an empty staging record so external inspection finds one
        self.index_mut().write_updates()?;

        Ok(())
    }
}
