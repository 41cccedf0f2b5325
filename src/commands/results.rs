use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Command;
use crate::app::context::AppContext;
use crate::core::args::RevisionRef;
use crate::core::context::{CompareResultsNode, InvocationContext, Trigger, ViewNode};

/// Reopen a stored comparison, the CLI's stand-in for a comparison-result
/// view node.
pub struct ResultsCommand<'a> {
    pub ref1: Option<&'a str>,
    pub ref2: Option<&'a str>,
    pub path: Option<&'a Path>,
}

impl Command for ResultsCommand<'_> {
    async fn run(&self, ctx: &AppContext) -> Result<()> {
        let repo_path = node_path(self.path)?;
        let node = CompareResultsNode::new(
            repo_path,
            self.ref1.map(RevisionRef::from),
            self.ref2.map(RevisionRef::from),
        );
        let context = InvocationContext::ViewNode {
            node: ViewNode::CompareResults(node),
        };

        ctx.compare_command()
            .run(Trigger::CompareViewNode, context, None)
            .await;
        Ok(())
    }
}

pub(super) fn node_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}
