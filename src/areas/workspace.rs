use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Name of the metadata root directory
pub const METADATA_DIR: &str = ".jot";

/// Working directory I/O
///
/// The engine tracks a flat namespace of plain files at the workspace root;
/// directories (including the metadata root) are never tracked.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the plain file names at the workspace root, sorted
    pub fn list_file_names(&self) -> anyhow::Result<Vec<String>> {
        let mut file_names = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().to_string();
                (file_name != METADATA_DIR).then_some(file_name)
            })
            .collect::<Vec<_>>();

        file_names.sort();
        Ok(file_names)
    }

    pub fn file_exists(&self, file_name: &str) -> bool {
        self.path.join(file_name).is_file()
    }

    pub fn read_file(&self, file_name: &str) -> anyhow::Result<String> {
        let file_path = self.path.join(file_name);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))
    }

    pub fn write_file(&self, file_name: &str, content: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        std::fs::write(&file_path, content)
            .with_context(|| format!("Unable to write file {}", file_path.display()))
    }

    /// Delete a working file; absent files are not an error
    pub fn remove_file(&self, file_name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(file_name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path)
                .with_context(|| format!("Unable to remove file {}", file_path.display()))?;
        }

        Ok(())
    }
}
