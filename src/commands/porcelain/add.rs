use crate::areas::repository::Repository;
use crate::artifacts::errors::{Error, Result};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Stage a working file for addition
    ///
    /// If the working content is identical to the version HEAD tracks, the
    /// file is *not* staged — and a stale staged entry is dropped, so
    /// reverting a file to its committed content cancels a pending add.
    /// Either way a pending removal of the name is cancelled: a file is
    /// never simultaneously added and removed.
    pub fn add(&self, file_name: &str) -> Result<()> {
        if !self.workspace().file_exists(file_name) {
            return Err(Error::FileNotFound);
        }

        let head = self.head_commit()?;
        let content = self.workspace().read_file(file_name)?;
        let blob = Blob::new(file_name.to_string(), content);
        let blob_digest = blob.digest();

        let mut index = self.index_mut();
        index.rehydrate()?;

        if head.blob_digest(file_name) == Some(&blob_digest) {
            index.unstage(file_name);
            index.clear_removal(file_name);
        } else {
            self.database().store(&blob)?;
            index.stage_add(file_name, blob_digest);
        }

        index.write_updates()?;

        Ok(())
    }
}
