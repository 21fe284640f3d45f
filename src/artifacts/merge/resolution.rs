//! Per-file three-way merge classification
//!
//! For every file name involved in a merge, the (base, current, given) blob
//! digests determine exactly one of seven disjoint cases. `classify` is a
//! pure function over that triple; the merge command matches on the result
//! and applies each case through the repository's checkout/add/rm
//! primitives.
//!
//! Equality is decided at digest granularity: two sides hold "the same"
//! content exactly when their blob digests match.

use crate::artifacts::objects::object_id::ObjectId;

/// The seven disjoint per-file merge cases
///
/// "Changed" always means changed relative to the merge base. A file
/// untouched on both sides maps to no case at all (`classify` returns
/// `None`) and the merge leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeCase {
    /// Present and unchanged in current, edited in given: take given's
    /// version and stage it for addition.
    GivenModified,
    /// Edited in current, unchanged in given: keep current.
    CurrentModified,
    /// Present and unchanged in current, deleted in given: stage for removal
    /// and delete the working copy.
    GivenDeleted,
    /// Deleted in current, unchanged in given: stays deleted.
    CurrentDeleted,
    /// Absent from base and given, added in current: keep current.
    CurrentAdded,
    /// Absent from base and current, added in given: take given's version
    /// and stage it for addition.
    GivenAdded,
    /// Changed on both sides. Identical changes resolve to a no-op,
    /// divergent ones to a conflict artifact.
    BothModified,
}

/// Classify one file by its presence and content in base, current and given
pub fn classify(
    base: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> Option<MergeCase> {
    let current_changed = current != base;
    let given_changed = given != base;

    match (current_changed, given_changed) {
        (false, false) => None,
        (false, true) => match (base, given) {
            (Some(_), Some(_)) => Some(MergeCase::GivenModified),
            (Some(_), None) => Some(MergeCase::GivenDeleted),
            (None, Some(_)) => Some(MergeCase::GivenAdded),
            (None, None) => None,
        },
        (true, false) => match (base, current) {
            (Some(_), Some(_)) => Some(MergeCase::CurrentModified),
            (Some(_), None) => Some(MergeCase::CurrentDeleted),
            (None, Some(_)) => Some(MergeCase::CurrentAdded),
            (None, None) => None,
        },
        (true, true) => Some(MergeCase::BothModified),
    }
}

/// Render the conflict artifact written to the working directory
///
/// The current side's content (or nothing) between the HEAD marker and the
/// separator, the given side's content (or nothing) between the separator
/// and the closing marker. Contents are spliced in verbatim.
pub fn conflict_artifact(current: Option<&str>, given: Option<&str>) -> String {
    let mut rendered = String::from("<<<<<<< HEAD\n");
    if let Some(content) = current {
        rendered.push_str(content);
    }
    rendered.push_str("=======\n");
    if let Some(content) = given {
        rendered.push_str(content);
    }
    rendered.push_str(">>>>>>>\n");
    rendered
}
