use std::sync::Arc;

use anyhow::Result;

use crate::core::action::CompareAction;
use crate::core::args::{CompareArgs, ResolvedRequest, RevisionRef};
use crate::core::context::{InvocationContext, Trigger};
use crate::core::normalize::normalize;
use crate::core::pickers::{RefPickOptions, ReferencePicker, RepositoryPicker};
use crate::messages::{ConsoleReporter, ErrorReporter};

const REPOSITORY_PURPOSE: &str = "Directory Compare Working Tree With";
const REFERENCE_TITLE: &str = "Directory Compare Working Tree with";
const REFERENCE_PLACEHOLDER: &str = "Choose a branch or tag to compare with";

/// Generic failure message shown to the user; the fault detail only reaches
/// the log.
pub const GENERIC_FAILURE: &str = "Unable to open directory compare";

/// Resolves an invocation into a directory compare request and hands it off.
///
/// Per invocation: normalize the trigger context into comparison endpoints,
/// resolve the owning repository, fill a missing first endpoint via the
/// reference picker, then dispatch the compare action as a detached task.
/// A picker yielding nothing ends the flow silently; any other fault is
/// caught once here, logged under the trigger's command id, and surfaced as
/// one generic message. The caller sees unit either way.
pub struct DirectoryCompareCommand<R, P, A> {
    repositories: R,
    references: P,
    action: Arc<A>,
    reporter: Arc<dyn ErrorReporter>,
}

impl<R, P, A> DirectoryCompareCommand<R, P, A>
where
    R: RepositoryPicker,
    P: ReferencePicker,
    A: CompareAction + 'static,
{
    pub fn new(repositories: R, references: P, action: A) -> Self {
        Self {
            repositories,
            references,
            action: Arc::new(action),
            reporter: Arc::new(ConsoleReporter),
        }
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Entry point for all four triggers.
    pub async fn run(
        &self,
        trigger: Trigger,
        context: InvocationContext,
        args: Option<CompareArgs>,
    ) {
        let args = normalize(trigger, &context, args.as_ref()).await;

        if let Err(err) = self.execute(&context, args).await {
            self.reporter.error(trigger.command_id(), &err);
            self.reporter.show_generic_error(GENERIC_FAILURE);
        }
    }

    async fn execute(&self, context: &InvocationContext, args: CompareArgs) -> Result<()> {
        let location = context.resource_location();

        let Some(repository) = self
            .repositories
            .best_repository(location, context.editor(), REPOSITORY_PURPOSE)
            .await?
        else {
            // Cancelled, or no repository found.
            return Ok(());
        };

        let ref1 = match args.ref1 {
            Some(ref1) => ref1,
            None => {
                let Some(picked) = self
                    .pick_reference(&repository.path)
                    .await?
                else {
                    return Ok(());
                };
                picked
            }
        };

        let request = ResolvedRequest {
            repo_path: repository.path,
            ref1,
            ref2: args.ref2,
        };

        // Fire and forget: the action's completion and failures are its own,
        // never observed here.
        let action = Arc::clone(&self.action);
        drop(tokio::spawn(async move {
            let _ = action.open_directory_compare(request).await;
        }));

        Ok(())
    }

    async fn pick_reference(&self, repo_path: &std::path::Path) -> Result<Option<RevisionRef>> {
        let pick = self
            .references
            .pick(
                repo_path,
                REFERENCE_TITLE,
                REFERENCE_PLACEHOLDER,
                RefPickOptions {
                    allow_entering_refs: true,
                },
            )
            .await?;

        // A selection without a resolvable ref ends the flow the same way a
        // cancellation does.
        Ok(pick.and_then(|selection| selection.reference))
    }
}
