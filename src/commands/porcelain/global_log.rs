use crate::areas::repository::Repository;
use crate::artifacts::errors::Result;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::cmp::Reverse;
use std::collections::{HashSet, VecDeque};

impl Repository {
    /// Print every commit reachable from any branch tip
    ///
    /// Traversal follows both parent edges and deduplicates by digest. The
    /// output is sorted by timestamp descending — a display order, not a
    /// topological one.
    pub fn global_log(&self) -> Result<()> {
        for (oid, commit) in self.all_commits()? {
            self.print_commit(&oid, &commit)?;
        }

        Ok(())
    }

    /// The global commit set, newest first
    ///
    /// Ties on the timestamp are broken by digest so the order is
    /// deterministic.
    pub(crate) fn all_commits(&self) -> Result<Vec<(ObjectId, Commit)>> {
        let mut visited = HashSet::<ObjectId>::new();
        let mut commits = Vec::new();
        let mut queue = VecDeque::new();

        for branch_name in self.refs().list_branches()? {
            if let Some(tip_oid) = self.refs().read_ref(&branch_name)? {
                queue.push_back(tip_oid);
            }
        }

        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            let commit = self.load_commit(&oid)?;
            for parent in commit.parent().into_iter().chain(commit.second_parent()) {
                queue.push_back(parent.clone());
            }
            commits.push((oid, commit));
        }

        commits.sort_by_key(|(oid, commit)| (Reverse(commit.timestamp()), oid.clone()));

        Ok(commits)
    }
}
