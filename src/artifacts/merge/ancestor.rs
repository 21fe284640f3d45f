//! Merge-base discovery
//!
//! The merge base of two branch tips is found by collecting the full
//! ancestor closure of each tip (following first *and* second parent edges),
//! intersecting the two closures, and picking the common ancestor with the
//! latest timestamp.
//!
//! Both closures are gathered in a single state map: every reachable commit
//! is tagged with which side(s) reached it, and the intersection is the set
//! of commits tagged from both sides.
//!
//! The latest-timestamp pick is a heuristic, not a provably minimal common
//! ancestor: under clock skew or criss-cross histories it can select a
//! non-minimal base. That behavior is inherited and kept deliberately; ties
//! are broken by digest order so the choice is at least deterministic.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, VecDeque};

bitflags! {
    /// Which tip(s) a commit has been reached from
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct VisitState: u8 {
        const FROM_CURRENT = 0b01;
        const FROM_GIVEN = 0b10;
        const FROM_BOTH = Self::FROM_CURRENT.bits() | Self::FROM_GIVEN.bits();
    }
}

/// Finds the merge base between two commits
///
/// Generic over a loader function so it can run against the on-disk object
/// database in production and an in-memory commit store in tests.
pub struct AncestorFinder<LoaderFn>
where
    LoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: LoaderFn,
}

impl<LoaderFn> AncestorFinder<LoaderFn>
where
    LoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: LoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find the merge base of `current` and `given`
    ///
    /// # Returns
    ///
    /// The common ancestor with the latest timestamp, or `None` when the two
    /// commits share no history at all (cannot happen between branches of
    /// one repository, which all descend from the initial commit).
    pub fn find_merge_base(
        &self,
        current: &ObjectId,
        given: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut states = HashMap::<ObjectId, VisitState>::new();
        let mut timestamps = HashMap::<ObjectId, chrono::DateTime<chrono::Utc>>::new();

        self.mark_closure(current, VisitState::FROM_CURRENT, &mut states, &mut timestamps)?;
        self.mark_closure(given, VisitState::FROM_GIVEN, &mut states, &mut timestamps)?;

        let base = states
            .into_iter()
            .filter(|(_, state)| state.contains(VisitState::FROM_BOTH))
            .filter_map(|(oid, _)| {
                timestamps
                    .get(&oid)
                    .copied()
                    .map(|timestamp| (timestamp, oid))
            })
            .max()
            .map(|(_, oid)| oid);

        Ok(base)
    }

    /// Tag every commit reachable from `start` with `side`
    fn mark_closure(
        &self,
        start: &ObjectId,
        side: VisitState,
        states: &mut HashMap<ObjectId, VisitState>,
        timestamps: &mut HashMap<ObjectId, chrono::DateTime<chrono::Utc>>,
    ) -> anyhow::Result<()> {
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(oid) = queue.pop_front() {
            let state = states.entry(oid.clone()).or_insert(VisitState::empty());
            if state.contains(side) {
                continue;
            }
            state.insert(side);

            let commit = (self.commit_loader)(&oid)?;
            timestamps.insert(oid, commit.timestamp);

            for parent in commit.parents {
                queue.push_back(parent);
            }
        }

        Ok(())
    }
}
