use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;
use skim::{
    Skim,
    prelude::{SkimItemReader, SkimOptionsBuilder},
};

use super::RepositoryPicker;
use crate::core::args::RepositoryHandle;
use crate::core::context::Editor;

/// Repository resolution for the CLI host.
///
/// Candidate roots are discovered from the location hint, the active editor's
/// document, and the current directory, in that order. A single candidate is
/// returned outright; several distinct roots raise a skim prompt labeled with
/// the purpose string; none yields `Ok(None)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkimRepositoryPicker;

impl RepositoryPicker for SkimRepositoryPicker {
    async fn best_repository(
        &self,
        location: Option<&Path>,
        editor: Option<&Editor>,
        purpose: &str,
    ) -> Result<Option<RepositoryHandle>> {
        let mut candidates: Vec<PathBuf> = Vec::new();

        let mut hints: Vec<PathBuf> = Vec::new();
        if let Some(location) = location {
            hints.push(location.to_path_buf());
        }
        if let Some(editor) = editor {
            hints.push(editor.document.clone());
        }
        if let Ok(cwd) = std::env::current_dir() {
            hints.push(cwd);
        }

        for hint in hints {
            if let Some(root) = discover_root(&hint)
                && !candidates.contains(&root)
            {
                candidates.push(root);
            }
        }

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.pop().map(RepositoryHandle::new)),
            _ => select_repository_interactive(&candidates, purpose),
        }
    }
}

/// Walk up from a hint (file or directory) to the owning repository root.
fn discover_root(hint: &Path) -> Option<PathBuf> {
    let start = if hint.is_dir() {
        hint
    } else {
        hint.parent().unwrap_or(hint)
    };
    let repo = Repository::discover(start).ok()?;
    repo.workdir().map(Path::to_path_buf)
}

fn select_repository_interactive(
    candidates: &[PathBuf],
    purpose: &str,
) -> Result<Option<RepositoryHandle>> {
    let items: Vec<String> = candidates
        .iter()
        .map(|root| {
            let handle = RepositoryHandle::new(root);
            format!("{}\t{}", handle.name, root.display())
        })
        .collect();
    let items_str = items.join("\n");

    let options = SkimOptionsBuilder::default()
        .height("50%".to_string())
        .multi(false)
        .prompt(format!("{purpose}> "))
        .build()
        .context("failed to build skim options")?;

    let item_reader = SkimItemReader::default();
    let items = item_reader.of_bufread(std::io::Cursor::new(items_str));

    let skim_output = Skim::run_with(&options, Some(items)).context("skim UI failed")?;

    if skim_output.is_abort {
        return Ok(None);
    }

    if let Some(item) = skim_output.selected_items.first() {
        let output = item.output();
        if let Some((_, root)) = output.split_once('\t') {
            return Ok(Some(RepositoryHandle::new(root)));
        }
    }

    Ok(None)
}
