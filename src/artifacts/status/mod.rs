//! Working-tree status report
//!
//! A status report is derived state: it is computed on demand from the
//! working-directory listing, the staging area and the HEAD commit, and
//! never persisted. The porcelain status command fills this struct and
//! renders it.

use std::io::Write;

/// The five sections of a status report, each already in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub current_branch: String,
    /// Every branch name except the current one, sorted
    pub other_branches: Vec<String>,
    /// Files staged for addition, sorted
    pub staged: Vec<String>,
    /// Files staged for removal, sorted
    pub removed: Vec<String>,
    /// Tracked or staged files whose working copy diverged, sorted
    pub modifications_not_staged: Vec<String>,
    /// Working-directory files the engine knows nothing about, sorted
    pub untracked: Vec<String>,
}

impl StatusReport {
    /// Render the report in its fixed five-section layout
    pub fn render(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "=== Branches ===")?;
        writeln!(writer, "*{}", self.current_branch)?;
        for branch in &self.other_branches {
            writeln!(writer, "{}", branch)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for file_name in &self.staged {
            writeln!(writer, "{}", file_name)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for file_name in &self.removed {
            writeln!(writer, "{}", file_name)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for file_name in &self.modifications_not_staged {
            writeln!(writer, "{}", file_name)?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for file_name in &self.untracked {
            writeln!(writer, "{}", file_name)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
