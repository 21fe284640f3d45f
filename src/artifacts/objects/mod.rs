//! Object types and operations
//!
//! Everything under version control is stored as an object identified by a
//! SHA-1 digest of its logical content. There are two object types:
//!
//! - **Blob**: a snapshot of one file's name and content
//! - **Commit**: a snapshot of the whole tracked file set plus metadata and
//!   parent linkage
//!
//! All objects are serialized to `<type> <size>\0<payload>` records and
//! stored zlib-compressed in the object database.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 digest in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
