use crate::areas::repository::Repository;
use crate::artifacts::errors::Result;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::StatusReport;
use std::collections::BTreeSet;

impl Repository {
    /// Print the working-tree status
    ///
    /// Everything here is derived on demand from the branch list, the
    /// staging area, the HEAD commit and the working-directory listing;
    /// nothing is persisted.
    pub fn status(&self) -> Result<()> {
        let report = self.status_report()?;
        report.render(&mut *self.writer())?;

        Ok(())
    }

    fn status_report(&self) -> Result<StatusReport> {
        let head = self.head_commit()?;
        let current_branch = self.refs().current_branch_name()?;

        let mut index = self.index_mut();
        index.rehydrate()?;

        let other_branches = self
            .refs()
            .list_branches()?
            .into_iter()
            .filter(|branch_name| branch_name != &current_branch)
            .collect();

        let disk_files = self
            .workspace()
            .list_file_names()?
            .into_iter()
            .collect::<BTreeSet<_>>();

        // staged-for-addition entries whose working copy drifted or vanished
        let mut modifications = BTreeSet::new();
        for (file_name, staged_digest) in index.added() {
            if !disk_files.contains(file_name) {
                modifications.insert(file_name.clone());
                continue;
            }

            let content = self.workspace().read_file(file_name)?;
            if &Blob::new(file_name.clone(), content).digest() != staged_digest {
                modifications.insert(file_name.clone());
            }
        }

        // HEAD-tracked files, staged neither way, modified or missing on disk
        for (file_name, tracked_digest) in head.file_table() {
            if index.is_staged_for_addition(file_name) || index.is_staged_for_removal(file_name) {
                continue;
            }

            if !disk_files.contains(file_name) {
                modifications.insert(file_name.clone());
                continue;
            }

            let content = self.workspace().read_file(file_name)?;
            if &Blob::new(file_name.clone(), content).digest() != tracked_digest {
                modifications.insert(file_name.clone());
            }
        }

        let untracked = self.untracked_files(&index, &head)?;

        Ok(StatusReport {
            current_branch,
            other_branches,
            staged: index.added().keys().cloned().collect(),
            removed: index.removed().iter().cloned().collect(),
            modifications_not_staged: modifications.into_iter().collect(),
            untracked: untracked.into_iter().collect(),
        })
    }
}
