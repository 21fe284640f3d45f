//! Command implementations
//!
//! All user-facing operations live here as `impl Repository` blocks, one
//! file per command. The CLI layer in `main.rs` only parses operands and
//! dispatches into these methods.

pub mod porcelain;
