//! Branch name validation
//!
//! Branch names become file names under `refs/heads`, so anything that could
//! escape that directory or confuse the ref parser is rejected before a ref
//! file is created.

use crate::artifacts::errors::Error;

/// A validated branch name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a branch name
    ///
    /// Rejected: empty names, path separators, control characters, names
    /// starting with a dot, `..` sequences, and a trailing `.lock`.
    pub fn try_parse(name: &str) -> Result<Self, Error> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.ends_with(".lock")
            && !name.contains("..")
            && !name
                .chars()
                .any(|c| c.is_control() || matches!(c, '/' | '\\' | ' ' | '~' | '^' | ':' | '*' | '?' | '['));

        if valid {
            Ok(BranchName(name.to_string()))
        } else {
            Err(Error::InvalidBranchName)
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
