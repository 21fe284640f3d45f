//! Staging area (index)
//!
//! The index holds the pending changes for the next commit: a map of file
//! names staged for addition (to their blob digests) and a set of file names
//! staged for removal. The two are always disjoint.
//!
//! ## Index file format
//!
//! A single line-oriented record:
//!
//! ```text
//! index 1 <added-count> <removed-count>
//! add <blob-digest> <file-name>
//! rm <file-name>
//! sum <sha1-of-the-preceding-lines>
//! ```
//!
//! The trailing checksum line is verified on load. A zero-length file is a
//! valid empty index.

use crate::artifacts::objects::object::sha1_hex;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use file_guard::Lock;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Record signature
const SIGNATURE: &str = "index";
/// Record format version
const VERSION: u32 = 1;

/// Staging area for the next commit
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.jot/index`)
    path: Box<Path>,
    /// Files staged for addition, by name
    added: BTreeMap<String, ObjectId>,
    /// Files staged for removal
    removed: BTreeSet<String>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn added(&self) -> &BTreeMap<String, ObjectId> {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn is_staged_for_addition(&self, file_name: &str) -> bool {
        self.added.contains_key(file_name)
    }

    pub fn is_staged_for_removal(&self, file_name: &str) -> bool {
        self.removed.contains(file_name)
    }

    pub fn staged_digest(&self, file_name: &str) -> Option<&ObjectId> {
        self.added.get(file_name)
    }

    /// Stage a file for addition, cancelling any pending removal of it
    pub fn stage_add(&mut self, file_name: &str, blob_digest: ObjectId) {
        self.removed.remove(file_name);
        self.added.insert(file_name.to_string(), blob_digest);
    }

    /// Drop a pending addition
    ///
    /// # Returns
    ///
    /// true if the file had been staged
    pub fn unstage(&mut self, file_name: &str) -> bool {
        self.added.remove(file_name).is_some()
    }

    /// Stage a file for removal, cancelling any pending addition of it
    pub fn stage_remove(&mut self, file_name: &str) {
        self.added.remove(file_name);
        self.removed.insert(file_name.to_string());
    }

    /// Drop a pending removal
    pub fn clear_removal(&mut self, file_name: &str) {
        self.removed.remove(file_name);
    }

    /// Empty both sets; only a successful commit or merge does this
    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
    }

    /// Load the index from disk
    ///
    /// Verifies the header and the trailing checksum. A missing or
    /// zero-length file loads as an empty index (and the file is created so
    /// external inspection always finds one).
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.added.clear();
        self.removed.clear();

        if !self.path.exists() {
            std::fs::File::create(&self.path)
                .with_context(|| format!("Unable to create index file {}", self.path.display()))?;
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        if content.is_empty() {
            return Ok(());
        }

        let (body, checksum_line) = content
            .trim_end_matches('\n')
            .rsplit_once('\n')
            .context("Corrupt index: missing checksum line")?;
        let expected = checksum_line
            .strip_prefix("sum ")
            .context("Corrupt index: malformed checksum line")?;

        let mut body_with_newline = body.to_string();
        body_with_newline.push('\n');
        if sha1_hex(&[body_with_newline.as_bytes()]) != expected {
            return Err(anyhow!("Corrupt index: checksum mismatch"));
        }

        let mut lines = body.lines();
        let header = lines.next().context("Corrupt index: missing header")?;
        let mut header_fields = header.split(' ');

        if header_fields.next() != Some(SIGNATURE) {
            return Err(anyhow!("Corrupt index: bad signature"));
        }
        let version = header_fields
            .next()
            .context("Corrupt index: missing version")?
            .parse::<u32>()
            .context("Corrupt index: non-numeric version")?;
        if version != VERSION {
            return Err(anyhow!("Unsupported index version: {}", version));
        }

        for line in lines {
            if let Some(entry) = line.strip_prefix("add ") {
                let (digest, file_name) = entry
                    .split_once(' ')
                    .context("Corrupt index: malformed add entry")?;
                self.added.insert(
                    file_name.to_string(),
                    ObjectId::try_parse(digest.to_string())?,
                );
            } else if let Some(file_name) = line.strip_prefix("rm ") {
                self.removed.insert(file_name.to_string());
            } else {
                return Err(anyhow!("Corrupt index: unrecognized entry: {}", line));
            }
        }

        Ok(())
    }

    /// Persist the index to disk
    ///
    /// Called after every mutation so external inspection always sees the
    /// latest state. Takes an exclusive advisory lock for the write.
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let mut body = format!(
            "{} {} {} {}\n",
            SIGNATURE,
            VERSION,
            self.added.len(),
            self.removed.len()
        );
        for (file_name, blob_digest) in &self.added {
            body.push_str(&format!("add {} {}\n", blob_digest, file_name));
        }
        for file_name in &self.removed {
            body.push_str(&format!("rm {}\n", file_name));
        }

        let checksum = sha1_hex(&[body.as_bytes()]);
        let record = format!("{}sum {}\n", body, checksum);

        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open index file {}", self.path.display()))?;
        let mut lock = file_guard::lock(&mut index_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(record.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use pretty_assertions::assert_eq;

    fn index_in(dir: &TempDir) -> Index {
        Index::new(dir.path().join("index").into_boxed_path())
    }

    fn oid(seed: u8) -> ObjectId {
        ObjectId::try_parse(format!("{:02x}", seed).repeat(20)).unwrap()
    }

    #[test]
    fn additions_and_removals_stay_disjoint() {
        let dir = TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.stage_add("a.txt", oid(1));
        index.stage_remove("a.txt");
        assert!(!index.is_staged_for_addition("a.txt"));
        assert!(index.is_staged_for_removal("a.txt"));

        index.stage_add("a.txt", oid(2));
        assert!(index.is_staged_for_addition("a.txt"));
        assert!(!index.is_staged_for_removal("a.txt"));
    }

    #[test]
    fn persisted_state_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.stage_add("a.txt", oid(1));
        index.stage_add("with space.txt", oid(2));
        index.stage_remove("b.txt");
        index.write_updates().unwrap();

        let mut reloaded = index_in(&dir);
        reloaded.rehydrate().unwrap();

        assert_eq!(reloaded.added(), index.added());
        assert_eq!(reloaded.removed(), index.removed());
    }

    #[test]
    fn missing_file_rehydrates_to_an_empty_index() {
        let dir = TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.rehydrate().unwrap();
        assert!(index.is_empty());
        // the record file now exists for external inspection
        assert!(index.path().exists());
    }

    #[test]
    fn tampered_records_are_rejected() {
        let dir = TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.stage_add("a.txt", oid(1));
        index.write_updates().unwrap();

        let record = std::fs::read_to_string(index.path()).unwrap();
        std::fs::write(index.path(), record.replace("a.txt", "b.txt")).unwrap();

        assert!(index.rehydrate().is_err());
    }

    #[test]
    fn clear_empties_both_sets() {
        let dir = TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.stage_add("a.txt", oid(1));
        index.stage_remove("b.txt");
        index.clear();

        assert!(index.is_empty());
    }
}
