use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// A storable object identified by a digest of its logical content
///
/// The digest is computed from the object's logical fields, not from its
/// on-disk serialization. Two objects with the same logical content collide
/// to the same digest in any repository, which is what makes the initial
/// commit universal.
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn digest(&self) -> ObjectId;

    fn object_path(&self) -> PathBuf {
        self.digest().to_path()
    }
}

/// Hash a sequence of byte chunks into a 40-character hex digest
///
/// Chunks are fed to the hasher in order, so the result is the digest of
/// their concatenation.
pub fn sha1_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part);
    }

    let digest = hasher.finalize();
    format!("{digest:x}")
}
