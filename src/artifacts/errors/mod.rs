//! Error taxonomy
//!
//! Every failure a command can report carries its literal user-facing
//! message. The variants group into four families: bad user input, violated
//! preconditions (reported before any mutation), missing references, and
//! ambiguous references. Infrastructure failures bubble up through the
//! `Io`/`Internal` conversions so lower layers can keep using `anyhow`
//! context internally.
//!
//! A merge conflict is deliberately *not* in this enum: it is a warning
//! printed while the merge completes, never an abort.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // -- user input ---------------------------------------------------------
    /// Wrong operand count or shape for a known command.
    #[error("Incorrect operands.")]
    IncorrectOperands,

    /// The command name is not recognized.
    #[error("No command with that name exists.")]
    UnknownCommand,

    /// Any command other than `init` run outside an initialized root.
    #[error("Not in an initialized directory.")]
    UninitializedDirectory,

    // -- preconditions ------------------------------------------------------
    /// `init` inside an already-initialized root.
    #[error("A jot version-control system already exists in the current directory.")]
    AlreadyInitialized,

    /// `add` of a file missing from the working directory.
    #[error("File does not exist.")]
    FileNotFound,

    /// `commit` with an empty staging area.
    #[error("No changes added to the commit.")]
    NothingStaged,

    /// `commit` with an empty message.
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    /// `rm` of a file neither staged for addition nor tracked by HEAD.
    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    /// `branch` with a name already taken.
    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    /// `branch` with a name that fails validation.
    #[error("Invalid branch name.")]
    InvalidBranchName,

    /// `rm-branch` or `merge` naming a branch that does not exist.
    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    /// `rm-branch` naming the current branch.
    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    /// `checkout` naming a branch that does not exist.
    #[error("No such branch exists.")]
    NoSuchBranch,

    /// `checkout` naming the current branch.
    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    /// `merge` naming the current branch.
    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    /// `merge` with a non-empty staging area.
    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    /// `merge` where the given tip is already reachable from the current tip.
    #[error("Given branch is an ancestor of the current branch.")]
    GivenBranchIsAncestor,

    /// checkout/reset/merge would clobber a file the engine does not know.
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    // -- missing references -------------------------------------------------
    /// A commit id (full or abbreviated) resolved to nothing.
    #[error("No commit with that id exists.")]
    CommitNotFound,

    /// A file name absent from the referenced commit's file table.
    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    /// `find` matched no commit message.
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    /// `log` with an unresolvable HEAD.
    #[error("No commits exist.")]
    NoCommitsExist,

    // -- ambiguous references -----------------------------------------------
    /// An abbreviated commit id matched more than one object.
    #[error("Ambiguous commit id: {0} matches more than one object.")]
    AmbiguousPrefix(String),

    // -- infrastructure -----------------------------------------------------
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
