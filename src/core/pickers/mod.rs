pub mod reference;
pub mod repository;

use std::future::Future;
use std::path::Path;

use anyhow::Result;

use crate::core::args::{RepositoryHandle, RevisionRef};
use crate::core::context::Editor;

pub use reference::SkimReferencePicker;
pub use repository::SkimRepositoryPicker;

/// Resolves the repository a compare should run in, prompting the user when
/// the hints are ambiguous. `Ok(None)` means cancellation or "no repository
/// found" and is never an error.
pub trait RepositoryPicker: Send + Sync {
    fn best_repository(
        &self,
        location: Option<&Path>,
        editor: Option<&Editor>,
        purpose: &str,
    ) -> impl Future<Output = Result<Option<RepositoryHandle>>> + Send;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RefPickOptions {
    /// Let the user type an arbitrary ref instead of choosing a listed one.
    pub allow_entering_refs: bool,
}

/// What the reference picker hands back. The selection may carry no
/// resolvable ref, which callers treat the same as cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSelection {
    pub reference: Option<RevisionRef>,
}

/// Interactive revision selection scoped to one repository. `Ok(None)` means
/// the user cancelled.
pub trait ReferencePicker: Send + Sync {
    fn pick(
        &self,
        repo_path: &Path,
        title: &str,
        placeholder: &str,
        options: RefPickOptions,
    ) -> impl Future<Output = Result<Option<RefSelection>>> + Send;
}
