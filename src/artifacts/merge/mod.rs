//! Merge algorithms
//!
//! - `ancestor`: merge-base discovery over the commit graph
//! - `resolution`: per-file three-way classification and conflict rendering

pub mod ancestor;
pub mod resolution;
