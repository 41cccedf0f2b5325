use std::path::{Path, PathBuf};

use crate::core::args::RevisionRef;

/// The four trigger identifiers that resolve into a directory compare.
///
/// Hosts register these through [`crate::commands::TRIGGER_TABLE`] rather than
/// discovering them implicitly; the table is the single source of the string
/// ids used for logging and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Generic invocation (palette, keybinding): both refs may be missing.
    Compare,
    /// Compare the working tree against `HEAD`.
    CompareWithHead,
    /// Reopen a previously computed comparison from a view node.
    CompareViewNode,
    /// Compare a view node's single ref against the working tree.
    CompareViewNodeWithWorking,
}

impl Trigger {
    /// Stable string id, used as the logging tag for this command.
    #[must_use]
    pub const fn command_id(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::CompareWithHead => "compare-with-head",
            Self::CompareViewNode => "compare-view-node",
            Self::CompareViewNodeWithWorking => "compare-view-node-with-working",
        }
    }
}

/// Stand-in for the host's active editor: the document it has open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub document: PathBuf,
}

/// A previously computed comparison surfaced as a view element.
///
/// Either endpoint may be absent (absent means "working tree"). `diff_refs`
/// is async because hosts may back the node with deferred comparison storage
/// that resolves on first access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareResultsNode {
    repo_path: PathBuf,
    base: Option<RevisionRef>,
    compare: Option<RevisionRef>,
}

impl CompareResultsNode {
    pub fn new(
        repo_path: impl Into<PathBuf>,
        base: Option<RevisionRef>,
        compare: Option<RevisionRef>,
    ) -> Self {
        Self {
            repo_path: repo_path.into(),
            base,
            compare,
        }
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// The pair of references this comparison was computed over.
    pub async fn diff_refs(&self) -> (Option<RevisionRef>, Option<RevisionRef>) {
        (self.base.clone(), self.compare.clone())
    }
}

/// A view element carrying exactly one revision ref.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefNode {
    repo_path: PathBuf,
    reference: RevisionRef,
}

impl RefNode {
    pub fn new(repo_path: impl Into<PathBuf>, reference: RevisionRef) -> Self {
        Self {
            repo_path: repo_path.into(),
            reference,
        }
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    #[must_use]
    pub const fn reference(&self) -> &RevisionRef {
        &self.reference
    }
}

/// Closed set of view node variants the compare triggers can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    CompareResults(CompareResultsNode),
    Ref(RefNode),
}

impl ViewNode {
    /// The single ref this node exposes, if it has that capability.
    #[must_use]
    pub const fn node_ref(&self) -> Option<&RevisionRef> {
        match self {
            Self::Ref(node) => Some(node.reference()),
            Self::CompareResults(_) => None,
        }
    }

    #[must_use]
    pub fn repo_path(&self) -> &Path {
        match self {
            Self::CompareResults(node) => node.repo_path(),
            Self::Ref(node) => node.repo_path(),
        }
    }
}

/// How the command was triggered, and what the host handed along with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationContext {
    /// Palette, keybinding, or menu: possibly an editor, possibly a location,
    /// possibly neither.
    Plain {
        editor: Option<Editor>,
        location: Option<PathBuf>,
    },
    /// A tree-view context action on a node.
    ViewNode { node: ViewNode },
}

impl InvocationContext {
    /// A context carrying nothing at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Plain {
            editor: None,
            location: None,
        }
    }

    /// The location used to find the owning repository: an explicit location
    /// wins, then the active editor's document, then the node's own path.
    #[must_use]
    pub fn resource_location(&self) -> Option<&Path> {
        match self {
            Self::Plain { location: Some(location), .. } => Some(location),
            Self::Plain { location: None, editor } => {
                editor.as_ref().map(|editor| editor.document.as_path())
            }
            Self::ViewNode { node } => Some(node.repo_path()),
        }
    }

    #[must_use]
    pub const fn editor(&self) -> Option<&Editor> {
        match self {
            Self::Plain { editor, .. } => editor.as_ref(),
            Self::ViewNode { .. } => None,
        }
    }
}
