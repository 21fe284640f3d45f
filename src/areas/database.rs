use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object database
///
/// Objects live under `objects/<first-2-hex>/<remaining-hex>`, serialized as
/// `<type> <size>\0<payload>` and zlib-compressed. Writing identical logical
/// content twice is a no-op: the path is derived from the digest, and an
/// existing object file is never rewritten.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Persist an object under its digest path
    ///
    /// Idempotent: storing the same logical content again finds the object
    /// file already present and does nothing.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<()> {
        let object_path = self.path.join(object.object_path());
        let object_content = object.serialize()?;

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object_content)?;
        }

        Ok(())
    }

    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(Some(Blob::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(Commit::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectType, impl BufRead)> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)?;

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make the write atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }

    /// Find all objects whose digest starts with the given prefix
    ///
    /// Resolves abbreviated ids: prefixes of at least 2 characters name a
    /// shard directory, whose entries are scanned for the remaining
    /// characters. Shorter prefixes match nothing.
    ///
    /// # Returns
    ///
    /// All matching object ids. Zero matches means the prefix names nothing;
    /// more than one means it is ambiguous. Both outcomes are the caller's
    /// to report.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let mut matches = Vec::new();

        if prefix.len() < 2 || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(matches);
        }

        let dir_name = &prefix[..2];
        let file_prefix = &prefix[2..];
        let dir_path = self.path.join(dir_name);

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let file_name = entry.file_name();
                let file_name_str = file_name.to_string_lossy();

                if file_name_str.starts_with(file_prefix) {
                    let full_oid = format!("{}{}", dir_name, file_name_str);
                    if let Ok(oid) = ObjectId::try_parse(full_oid) {
                        matches.push(oid);
                    }
                }
            }
        }

        Ok(matches)
    }
}
