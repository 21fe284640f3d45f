//! Data structures and algorithms
//!
//! This module contains the immutable building blocks of the engine:
//!
//! - `branch`: branch name validation
//! - `core`: shared utilities (pager wrapper)
//! - `errors`: the user-facing error taxonomy
//! - `merge`: common-ancestor discovery and per-file merge resolution
//! - `objects`: object types (blob, commit) and identifiers
//! - `status`: working-tree status reports

pub mod branch;
pub mod core;
pub mod errors;
pub mod merge;
pub mod objects;
pub mod status;
