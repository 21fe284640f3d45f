//! Object identifier (SHA-1 digest)
//!
//! Object IDs are 40-character hexadecimal strings identifying all objects
//! (blobs and commits) by their logical content.
//!
//! ## Format
//!
//! - Full: 40 hex characters
//! - Short: first 7 characters (used in merge lines of the log output)
//!
//! ## Storage
//!
//! Objects are stored in `.jot/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::PathBuf;

/// Object identifier (SHA-1 digest)
///
/// A 40-character lowercase hexadecimal string that uniquely identifies an
/// object's logical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Wrap a freshly computed digest without re-validating it
    ///
    /// Only for hex strings produced by the hashing helpers in this crate.
    pub(crate) fn from_digest(hex: String) -> Self {
        debug_assert_eq!(hex.len(), OBJECT_ID_LENGTH);
        Self(hex)
    }

    /// Convert to the sharded file system path used by the object database
    ///
    /// Splits the digest as `XX/YYYY...` where XX is the first 2 characters.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Get the abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the digest
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
