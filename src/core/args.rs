use std::fmt;
use std::path::PathBuf;

/// Opaque identifier for a commit, branch, tag, or the `HEAD` sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionRef(String);

impl RevisionRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The `HEAD` sentinel.
    #[must_use]
    pub fn head() -> Self {
        Self("HEAD".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RevisionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RevisionRef {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl From<String> for RevisionRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

/// Partially resolved comparison endpoints.
///
/// `ref1 == None` means the reference must still be chosen interactively;
/// `ref2 == None` means "compare against the working tree". A fresh record is
/// produced per invocation and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareArgs {
    pub ref1: Option<RevisionRef>,
    pub ref2: Option<RevisionRef>,
}

/// A repository chosen by the repository picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryHandle {
    pub path: PathBuf,
    pub name: String,
}

impl RepositoryHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        Self { path, name }
    }
}

/// Fully resolved comparison request, the only value handed to the compare
/// action. `ref1` is concrete by construction; `ref2 == None` keeps meaning
/// "working tree".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub repo_path: PathBuf,
    pub ref1: RevisionRef,
    pub ref2: Option<RevisionRef>,
}
