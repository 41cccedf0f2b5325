use std::path::Path;

use anyhow::Result;

use super::Command;
use crate::app::context::AppContext;
use crate::core::context::{InvocationContext, Trigger};

pub struct HeadCommand<'a> {
    pub path: Option<&'a Path>,
}

impl Command for HeadCommand<'_> {
    async fn run(&self, ctx: &AppContext) -> Result<()> {
        let context = InvocationContext::Plain {
            editor: None,
            location: self.path.map(Path::to_path_buf),
        };

        // HEAD-compare derives both endpoints itself; no payload to carry.
        ctx.compare_command()
            .run(Trigger::CompareWithHead, context, None)
            .await;
        Ok(())
    }
}
