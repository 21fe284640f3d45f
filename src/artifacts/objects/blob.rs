//! Blob object
//!
//! A blob snapshots one file at stage time: its name and its content.
//! The digest covers both, so files with equal content but different names
//! are distinct objects.
//!
//! ## Format
//!
//! On disk: `blob <size>\0<file-name>\n<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, sha1_hex};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// Immutable snapshot of one file's name and content
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Blob {
    file_name: String,
    content: String,
}

impl Blob {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();
        content_bytes.write_all(self.file_name.as_bytes())?;
        content_bytes.write_all(b"\n")?;
        content_bytes.write_all(self.content.as_bytes())?;

        let mut blob_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        blob_bytes.write_all(header.as_bytes())?;
        blob_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        // the header has already been read
        let payload = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let payload = String::from_utf8(payload)?;

        let (file_name, content) = payload.split_once('\n').unwrap_or((payload.as_str(), ""));

        Ok(Self::new(file_name.to_string(), content.to_string()))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn digest(&self) -> ObjectId {
        ObjectId::from_digest(sha1_hex(&[
            self.file_name.as_bytes(),
            self.content.as_bytes(),
        ]))
    }
}
