pub mod action;
pub mod args;
pub mod command;
pub mod context;
pub mod normalize;
pub mod pickers;

pub use action::{CompareAction, DifftoolAction};
pub use args::{CompareArgs, RepositoryHandle, ResolvedRequest, RevisionRef};
pub use command::{DirectoryCompareCommand, GENERIC_FAILURE};
pub use context::{CompareResultsNode, Editor, InvocationContext, RefNode, Trigger, ViewNode};
pub use normalize::normalize;
