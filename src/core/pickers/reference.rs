use std::path::Path;

use anyhow::{Context, Result};
use git2::{BranchType, Repository};
use skim::{
    Skim,
    prelude::{SkimItemReader, SkimOptionsBuilder},
};

use super::{RefPickOptions, RefSelection, ReferencePicker};
use crate::config::CompareConfig;
use crate::core::args::RevisionRef;

/// Revision selection for the CLI host, backed by skim.
///
/// Lists local branches, remote branches, then tags, bounded by
/// `dircompare.ref-limit`. With `allow_entering_refs`, accepting a query that
/// matches no listed item takes the typed text as the ref.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkimReferencePicker;

impl ReferencePicker for SkimReferencePicker {
    async fn pick(
        &self,
        repo_path: &Path,
        title: &str,
        placeholder: &str,
        options: RefPickOptions,
    ) -> Result<Option<RefSelection>> {
        let cfg = CompareConfig::load(repo_path)?;
        let refs = list_refs(repo_path, cfg.ref_limit)?;

        let items_str = refs.join("\n");

        let skim_options = SkimOptionsBuilder::default()
            .height("50%".to_string())
            .multi(false)
            .prompt(format!("{title}> "))
            .header(Some(placeholder.to_string()))
            .build()
            .context("failed to build skim options")?;

        let item_reader = SkimItemReader::default();
        let items = item_reader.of_bufread(std::io::Cursor::new(items_str));

        let skim_output = Skim::run_with(&skim_options, Some(items)).context("skim UI failed")?;

        if skim_output.is_abort {
            return Ok(None);
        }

        if let Some(item) = skim_output.selected_items.first() {
            let reference = RevisionRef::new(item.output().into_owned());
            return Ok(Some(RefSelection {
                reference: Some(reference),
            }));
        }

        // Nothing matched; a typed query counts as an entered ref when the
        // caller allows it.
        if options.allow_entering_refs && !skim_output.query.is_empty() {
            return Ok(Some(RefSelection {
                reference: Some(RevisionRef::new(skim_output.query.clone())),
            }));
        }

        Ok(None)
    }
}

/// Collect branch and tag names from the repository, capped at `limit`.
fn list_refs(repo_path: &Path, limit: usize) -> Result<Vec<String>> {
    let repo = Repository::discover(repo_path)
        .with_context(|| format!("failed to open repository at {}", repo_path.display()))?;

    let mut refs = Vec::new();

    for branch_type in [BranchType::Local, BranchType::Remote] {
        for branch in repo.branches(Some(branch_type))? {
            if refs.len() >= limit {
                return Ok(refs);
            }
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                refs.push(name.to_string());
            }
        }
    }

    let tags = repo.tag_names(None)?;
    for tag in tags.iter().flatten() {
        if refs.len() >= limit {
            break;
        }
        refs.push(tag.to_string());
    }

    Ok(refs)
}
