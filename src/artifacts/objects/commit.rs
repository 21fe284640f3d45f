//! Commit object
//!
//! Commits are immutable nodes in the history graph. They contain:
//! - A commit message
//! - A timestamp (second precision)
//! - A file table mapping tracked file names to blob digests
//! - One parent digest, or two for merge commits
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-digest>
//! timestamp <seconds-since-epoch>
//! file <blob-digest> <file-name>
//!
//! <commit message>
//! ```
//!
//! The digest covers the message, the timestamp, the serialized file table
//! and the first parent only. The very first commit in any repository has an
//! empty table, the epoch timestamp and no parent, so it hashes to the same
//! digest everywhere.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, sha1_hex};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufRead, Write};

/// Message of the universal initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Slim representation of a commit
///
/// Carries only what graph traversals need: identity, parent linkage and the
/// timestamp used to order candidates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
    pub timestamp: DateTime<Utc>,
}

impl PartialOrd for SlimCommit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SlimCommit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp
            .cmp(&other.timestamp)
            .then_with(|| self.oid.cmp(&other.oid))
    }
}

/// Immutable snapshot of the tracked file set plus metadata
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    message: String,
    timestamp: DateTime<Utc>,
    file_table: BTreeMap<String, ObjectId>,
    /// Parent digests: empty for the initial commit, two for merge commits
    parents: Vec<ObjectId>,
}

impl Commit {
    pub fn new(
        message: String,
        timestamp: DateTime<Utc>,
        file_table: BTreeMap<String, ObjectId>,
        parents: Vec<ObjectId>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            file_table,
            parents,
        }
    }

    /// The universal initial commit
    ///
    /// Empty file table, epoch timestamp, fixed message, no parent. Every
    /// freshly initialized repository persists this exact object.
    pub fn initial() -> Self {
        Commit::new(
            INITIAL_COMMIT_MESSAGE.to_string(),
            DateTime::UNIX_EPOCH,
            BTreeMap::new(),
            Vec::new(),
        )
    }

    /// Build the next commit from this one and the staging area contents
    ///
    /// Copies this commit's file table, upserts the staged additions,
    /// removes the staged removals, stamps the current time and links this
    /// commit as first parent.
    pub fn build_next(
        &self,
        added: &BTreeMap<String, ObjectId>,
        removed: &BTreeSet<String>,
        message: &str,
    ) -> Self {
        let mut file_table = self.file_table.clone();

        for (file_name, blob_digest) in added {
            file_table.insert(file_name.clone(), blob_digest.clone());
        }
        for file_name in removed {
            file_table.remove(file_name);
        }

        Commit::new(
            message.to_string(),
            Utc::now(),
            file_table,
            vec![self.digest()],
        )
    }

    /// Attach a second parent, turning this into a merge commit
    ///
    /// The second parent is not part of the digest, so this must happen
    /// before the commit is first persisted.
    pub fn with_second_parent(mut self, second_parent: ObjectId) -> Self {
        self.parents.truncate(1);
        self.parents.push(second_parent);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Format the timestamp for the log output
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%a %b %d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn file_table(&self) -> &BTreeMap<String, ObjectId> {
        &self.file_table
    }

    pub fn tracks(&self, file_name: &str) -> bool {
        self.file_table.contains_key(file_name)
    }

    pub fn blob_digest(&self, file_name: &str) -> Option<&ObjectId> {
        self.file_table.get(file_name)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge_commit(&self) -> bool {
        self.second_parent().is_some()
    }

    pub fn slim(&self) -> SlimCommit {
        SlimCommit {
            oid: self.digest(),
            parents: self.parents.clone(),
            timestamp: self.timestamp,
        }
    }

    /// Serialize the file table for hashing
    ///
    /// BTreeMap iteration keeps the serialization deterministic.
    fn serialize_file_table(&self) -> String {
        self.file_table
            .iter()
            .map(|(file_name, blob_digest)| format!("{}:{}\n", file_name, blob_digest))
            .collect()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut lines = vec![];

        for parent in &self.parents {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!("timestamp {}", self.timestamp.timestamp()));
        for (file_name, blob_digest) in &self.file_table {
            lines.push(format!("file {} {}", blob_digest.as_ref(), file_name));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        let content = lines.join("\n");

        let mut content_bytes = Vec::new();
        content_bytes.write_all(content.as_bytes())?;

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;

        while let Some(parent_digest) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_digest.to_string())?);
            next_line = lines
                .next()
                .context("Invalid commit object: missing timestamp line")?;
        }

        let seconds = next_line
            .strip_prefix("timestamp ")
            .context("Invalid commit object: invalid timestamp line")?
            .parse::<i64>()
            .context("Invalid commit object: non-numeric timestamp")?;
        let timestamp = DateTime::from_timestamp(seconds, 0)
            .context("Invalid commit object: timestamp out of range")?;

        let mut file_table = BTreeMap::new();
        for line in lines.by_ref() {
            let Some(entry) = line.strip_prefix("file ") else {
                // the blank line separating the table from the message
                break;
            };

            let (blob_digest, file_name) = entry
                .split_once(' ')
                .context("Invalid commit object: malformed file entry")?;
            file_table.insert(
                file_name.to_string(),
                ObjectId::try_parse(blob_digest.to_string())?,
            );
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Self::new(message, timestamp, file_table, parents))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn digest(&self) -> ObjectId {
        let seconds = self.timestamp.timestamp().to_string();
        let file_table = self.serialize_file_table();
        let first_parent = self
            .parents
            .first()
            .map(|parent| parent.as_ref())
            .unwrap_or_default();

        ObjectId::from_digest(sha1_hex(&[
            self.message.as_bytes(),
            seconds.as_bytes(),
            file_table.as_bytes(),
            first_parent.as_bytes(),
        ]))
    }
}
