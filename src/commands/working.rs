use std::path::Path;

use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::args::RevisionRef;
use crate::core::context::{InvocationContext, RefNode, Trigger, ViewNode};

/// Compare one revision with the working tree, the CLI's stand-in for a
/// ref-carrying view node.
pub struct WorkingCommand<'a> {
    pub reference: &'a str,
    pub path: Option<&'a Path>,
}

impl Command for WorkingCommand<'_> {
    async fn run(&self, ctx: &AppContext) -> Result<()> {
        let repo_path = super::results::node_path(self.path)?;
        let node = RefNode::new(repo_path, RevisionRef::from(self.reference));
        let context = InvocationContext::ViewNode {
            node: ViewNode::Ref(node),
        };

        ctx.compare_command()
            .run(Trigger::CompareViewNodeWithWorking, context, None)
            .await;
        Ok(())
    }
}
