//! jot — a small single-user version-control engine
//!
//! The crate is split the same way the repository metadata is:
//!
//! - `areas`: the mutable areas of a repository (object database, staging
//!   index, refs, workspace) and the `Repository` orchestrator that owns them
//! - `artifacts`: immutable data structures and algorithms (objects, merge
//!   resolution, status reports, errors)
//! - `commands`: user-facing operations implemented on `Repository`

pub mod areas;
pub mod artifacts;
pub mod commands;
