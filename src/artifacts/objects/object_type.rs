use anyhow::Context;
use std::io::BufRead;

/// Type tag carried by every serialized object record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Parse the `<type> <size>\0` header at the start of an object record
    ///
    /// Consumes the header from the reader, leaving it positioned at the
    /// payload.
    pub fn parse_object_type(reader: &mut impl BufRead) -> anyhow::Result<Self> {
        let mut header = Vec::new();
        reader
            .read_until(0, &mut header)
            .context("Unable to read object header")?;
        header.pop();

        let header = String::from_utf8(header).context("Invalid object header encoding")?;
        let type_token = header
            .split(' ')
            .next()
            .context("Missing object type in header")?;

        match type_token {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            other => Err(anyhow::anyhow!("Unknown object type: {}", other)),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
