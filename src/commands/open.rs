use std::path::Path;

use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::args::{CompareArgs, RevisionRef};
use crate::core::context::{InvocationContext, Trigger};

pub struct OpenCommand<'a> {
    pub ref1: Option<&'a str>,
    pub ref2: Option<&'a str>,
    pub path: Option<&'a Path>,
}

impl Command for OpenCommand<'_> {
    async fn run(&self, ctx: &AppContext) -> Result<()> {
        let context = InvocationContext::Plain {
            editor: None,
            location: self.path.map(Path::to_path_buf),
        };
        let args = CompareArgs {
            ref1: self.ref1.map(RevisionRef::from),
            ref2: self.ref2.map(RevisionRef::from),
        };

        ctx.compare_command()
            .run(Trigger::Compare, context, Some(args))
            .await;
        Ok(())
    }
}
