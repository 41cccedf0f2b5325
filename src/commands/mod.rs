use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::{
    app::context::AppContext,
    cli::{Cli, Commands},
    core::context::Trigger,
};

pub mod head;
pub mod open;
pub mod results;
pub mod working;

/// Explicit registration of the trigger identifiers hosts dispatch on. Each
/// id maps to one trigger; unknown ids simply have no handler.
pub const TRIGGER_TABLE: &[(&str, Trigger)] = &[
    ("compare", Trigger::Compare),
    ("compare-with-head", Trigger::CompareWithHead),
    ("compare-view-node", Trigger::CompareViewNode),
    (
        "compare-view-node-with-working",
        Trigger::CompareViewNodeWithWorking,
    ),
];

/// Look up a trigger by its registered command id.
#[must_use]
pub fn trigger_for(command_id: &str) -> Option<Trigger> {
    TRIGGER_TABLE
        .iter()
        .find(|(id, _)| *id == command_id)
        .map(|(_, trigger)| *trigger)
}

/// Unified interface implemented by each subcommand handler.
pub trait Command {
    /// Execute the subcommand.
    ///
    /// # Errors
    /// Returns an error if the command fails.
    fn run(&self, ctx: &AppContext) -> impl Future<Output = Result<()>>;
}

// A detached compare task may still be driving a difftool session when the
// resolving command returns; keep the runtime up long enough for it.
const DETACHED_TASK_GRACE: Duration = Duration::from_secs(3600);

/// Central dispatcher: routes parsed CLI to subcommand handlers.
///
/// # Errors
/// Returns an error if the invoked subcommand fails.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let ctx = AppContext::new(cli.verbose);

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async {
        match &cli.command {
            Commands::Open { ref1, ref2, path } => {
                let cmd = open::OpenCommand {
                    ref1: ref1.as_deref(),
                    ref2: ref2.as_deref(),
                    path: path.as_deref(),
                };
                cmd.run(&ctx).await
            }
            Commands::Head { path } => {
                let cmd = head::HeadCommand {
                    path: path.as_deref(),
                };
                cmd.run(&ctx).await
            }
            Commands::Results { ref1, ref2, path } => {
                let cmd = results::ResultsCommand {
                    ref1: ref1.as_deref(),
                    ref2: ref2.as_deref(),
                    path: path.as_deref(),
                };
                cmd.run(&ctx).await
            }
            Commands::Working { reference, path } => {
                let cmd = working::WorkingCommand {
                    reference: reference.as_str(),
                    path: path.as_deref(),
                };
                cmd.run(&ctx).await
            }
        }
    });
    rt.shutdown_timeout(DETACHED_TASK_GRACE);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trigger_round_trips_through_the_table() {
        for (id, trigger) in TRIGGER_TABLE {
            assert_eq!(trigger.command_id(), *id);
            assert_eq!(trigger_for(id), Some(*trigger));
        }
    }

    #[test]
    fn unknown_ids_have_no_trigger() {
        assert_eq!(trigger_for("compare-with-upstream"), None);
    }
}
