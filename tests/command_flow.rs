use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, anyhow};
use tokio::sync::mpsc;

use git_dircompare::core::action::CompareAction;
use git_dircompare::core::args::{CompareArgs, RepositoryHandle, ResolvedRequest, RevisionRef};
use git_dircompare::core::command::{DirectoryCompareCommand, GENERIC_FAILURE};
use git_dircompare::core::context::{
    CompareResultsNode, Editor, InvocationContext, Trigger, ViewNode,
};
use git_dircompare::core::pickers::{
    RefPickOptions, RefSelection, ReferencePicker, RepositoryPicker,
};
use git_dircompare::messages::ErrorReporter;

// --- Mock collaborators ---

struct FixedRepositoryPicker {
    repo: Option<PathBuf>,
}

impl RepositoryPicker for FixedRepositoryPicker {
    async fn best_repository(
        &self,
        _location: Option<&Path>,
        _editor: Option<&Editor>,
        _purpose: &str,
    ) -> Result<Option<RepositoryHandle>> {
        Ok(self.repo.clone().map(RepositoryHandle::new))
    }
}

struct FailingRepositoryPicker;

impl RepositoryPicker for FailingRepositoryPicker {
    async fn best_repository(
        &self,
        _location: Option<&Path>,
        _editor: Option<&Editor>,
        _purpose: &str,
    ) -> Result<Option<RepositoryHandle>> {
        Err(anyhow!("repository storage unavailable"))
    }
}

struct FixedReferencePicker {
    selection: Option<RefSelection>,
}

impl ReferencePicker for FixedReferencePicker {
    async fn pick(
        &self,
        _repo_path: &Path,
        _title: &str,
        _placeholder: &str,
        options: RefPickOptions,
    ) -> Result<Option<RefSelection>> {
        // The completer always lets the user type an arbitrary ref.
        assert!(options.allow_entering_refs);
        Ok(self.selection.clone())
    }
}

/// Reference picker that must never be consulted.
struct UnusedReferencePicker;

impl ReferencePicker for UnusedReferencePicker {
    async fn pick(
        &self,
        _repo_path: &Path,
        _title: &str,
        _placeholder: &str,
        _options: RefPickOptions,
    ) -> Result<Option<RefSelection>> {
        panic!("reference picker consulted although ref1 was already concrete");
    }
}

struct RecordingAction {
    dispatched: mpsc::UnboundedSender<ResolvedRequest>,
}

impl CompareAction for RecordingAction {
    async fn open_directory_compare(&self, request: ResolvedRequest) -> Result<()> {
        self.dispatched.send(request).ok();
        Ok(())
    }
}

#[derive(Default)]
struct RecordingReporter {
    errors: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl ErrorReporter for RecordingReporter {
    fn error(&self, command_id: &str, _err: &anyhow::Error) {
        self.errors.lock().unwrap().push(command_id.to_string());
    }

    fn show_generic_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

// --- Harness ---

struct Flow {
    reporter: Arc<RecordingReporter>,
    dispatched: mpsc::UnboundedReceiver<ResolvedRequest>,
}

impl Flow {
    async fn run<R, P>(
        repositories: R,
        references: P,
        trigger: Trigger,
        context: InvocationContext,
        args: Option<CompareArgs>,
    ) -> Self
    where
        R: RepositoryPicker,
        P: ReferencePicker,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let reporter = Arc::new(RecordingReporter::default());
        let command = DirectoryCompareCommand::new(
            repositories,
            references,
            RecordingAction { dispatched: tx },
        )
        .with_reporter(Arc::clone(&reporter) as Arc<dyn ErrorReporter>);

        command.run(trigger, context, args).await;
        drop(command); // drop the action's sender so recv() can settle

        Self {
            reporter,
            dispatched: rx,
        }
    }

    async fn dispatched_request(&mut self) -> Option<ResolvedRequest> {
        tokio::time::timeout(Duration::from_secs(5), self.dispatched.recv())
            .await
            .expect("timed out waiting for the compare action")
    }

    fn error_tags(&self) -> Vec<String> {
        self.reporter.errors.lock().unwrap().clone()
    }

    fn user_messages(&self) -> Vec<String> {
        self.reporter.messages.lock().unwrap().clone()
    }
}

fn repo_at(path: &str) -> FixedRepositoryPicker {
    FixedRepositoryPicker {
        repo: Some(PathBuf::from(path)),
    }
}

// --- Scenarios ---

#[tokio::test]
async fn head_compare_dispatches_head_against_working_tree() {
    let mut flow = Flow::run(
        repo_at("/repo"),
        UnusedReferencePicker,
        Trigger::CompareWithHead,
        InvocationContext::empty(),
        None,
    )
    .await;

    let request = flow.dispatched_request().await.expect("one dispatch");
    assert_eq!(request.repo_path, PathBuf::from("/repo"));
    assert_eq!(request.ref1, RevisionRef::head());
    assert_eq!(request.ref2, None);
    assert!(flow.error_tags().is_empty());
}

#[tokio::test]
async fn results_node_dispatches_its_stored_pair() {
    let node = ViewNode::CompareResults(CompareResultsNode::new(
        "/repo",
        Some(RevisionRef::new("abc123")),
        Some(RevisionRef::new("def456")),
    ));
    let mut flow = Flow::run(
        repo_at("/repo"),
        UnusedReferencePicker,
        Trigger::CompareViewNode,
        InvocationContext::ViewNode { node },
        None,
    )
    .await;

    let request = flow.dispatched_request().await.expect("one dispatch");
    assert_eq!(request.ref1, RevisionRef::new("abc123"));
    assert_eq!(request.ref2, Some(RevisionRef::new("def456")));
}

#[tokio::test]
async fn missing_ref1_is_filled_from_the_reference_picker() {
    let references = FixedReferencePicker {
        selection: Some(RefSelection {
            reference: Some(RevisionRef::new("main")),
        }),
    };
    let mut flow = Flow::run(
        repo_at("/repo"),
        references,
        Trigger::Compare,
        InvocationContext::empty(),
        Some(CompareArgs::default()),
    )
    .await;

    let request = flow.dispatched_request().await.expect("one dispatch");
    assert_eq!(request.repo_path, PathBuf::from("/repo"));
    assert_eq!(request.ref1, RevisionRef::new("main"));
    assert_eq!(request.ref2, None);
    assert!(flow.error_tags().is_empty());
    assert!(flow.user_messages().is_empty());
}

#[tokio::test]
async fn cancelled_repository_pick_is_a_silent_no_op() {
    let mut flow = Flow::run(
        FixedRepositoryPicker { repo: None },
        UnusedReferencePicker,
        Trigger::CompareWithHead,
        InvocationContext::empty(),
        None,
    )
    .await;

    assert_eq!(flow.dispatched_request().await, None);
    assert!(flow.error_tags().is_empty());
    assert!(flow.user_messages().is_empty());
}

#[tokio::test]
async fn cancelled_reference_pick_is_a_silent_no_op() {
    let mut flow = Flow::run(
        repo_at("/repo"),
        FixedReferencePicker { selection: None },
        Trigger::Compare,
        InvocationContext::empty(),
        None,
    )
    .await;

    assert_eq!(flow.dispatched_request().await, None);
    assert!(flow.error_tags().is_empty());
    assert!(flow.user_messages().is_empty());
}

#[tokio::test]
async fn selection_without_a_resolvable_ref_aborts_silently() {
    let mut flow = Flow::run(
        repo_at("/repo"),
        FixedReferencePicker {
            selection: Some(RefSelection { reference: None }),
        },
        Trigger::Compare,
        InvocationContext::empty(),
        None,
    )
    .await;

    assert_eq!(flow.dispatched_request().await, None);
    assert!(flow.error_tags().is_empty());
    assert!(flow.user_messages().is_empty());
}

#[tokio::test]
async fn unexpected_fault_reports_once_and_dispatches_nothing() {
    let mut flow = Flow::run(
        FailingRepositoryPicker,
        UnusedReferencePicker,
        Trigger::CompareWithHead,
        InvocationContext::empty(),
        None,
    )
    .await;

    assert_eq!(flow.dispatched_request().await, None);
    assert_eq!(flow.error_tags(), vec!["compare-with-head".to_string()]);
    assert_eq!(flow.user_messages(), vec![GENERIC_FAILURE.to_string()]);
}

#[tokio::test]
async fn concrete_ref1_skips_reference_resolution() {
    let mut flow = Flow::run(
        repo_at("/repo"),
        UnusedReferencePicker,
        Trigger::Compare,
        InvocationContext::empty(),
        Some(CompareArgs {
            ref1: Some(RevisionRef::new("release/1.2")),
            ref2: Some(RevisionRef::new("release/1.3")),
        }),
    )
    .await;

    let request = flow.dispatched_request().await.expect("one dispatch");
    assert_eq!(request.ref1, RevisionRef::new("release/1.2"));
    assert_eq!(request.ref2, Some(RevisionRef::new("release/1.3")));
}
