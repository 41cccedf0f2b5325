use std::future::Future;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::config::CompareConfig;
use crate::core::args::ResolvedRequest;

/// The terminal delegation target: opens a whole-directory diff between the
/// two resolved endpoints.
///
/// The completer dispatches this as a detached task and never observes the
/// outcome, so the returned future must own everything it needs (`Send`) and
/// implementations handle their own failures.
pub trait CompareAction: Send + Sync {
    fn open_directory_compare(
        &self,
        request: ResolvedRequest,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Directory compare via `git difftool --dir-diff`.
///
/// An absent `ref2` falls through to git's default, the working tree. The
/// tool can be overridden with `dircompare.tool`; otherwise git's own
/// difftool configuration applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct DifftoolAction;

impl CompareAction for DifftoolAction {
    async fn open_directory_compare(&self, request: ResolvedRequest) -> Result<()> {
        let result = tokio::task::spawn_blocking(move || run_difftool(&request))
            .await
            .context("directory compare task failed to run")?;

        if let Err(err) = &result {
            // Failures here are this action's own business; the resolving
            // command has already returned.
            tracing::error!(error = ?err, "directory compare tool failed");
        }
        result
    }
}

fn run_difftool(request: &ResolvedRequest) -> Result<()> {
    let cfg = CompareConfig::load(&request.repo_path)?;

    let mut cmd = Command::new("git");
    cmd.arg("-C")
        .arg(&request.repo_path)
        .args(["difftool", "--dir-diff", "--no-prompt"]);
    if let Some(tool) = &cfg.tool {
        cmd.arg("--tool").arg(tool);
    }
    cmd.arg(request.ref1.as_str());
    if let Some(ref2) = &request.ref2 {
        cmd.arg(ref2.as_str());
    }

    tracing::info!(
        repo = %request.repo_path.display(),
        ref1 = %request.ref1,
        ref2 = ?request.ref2,
        "opening directory compare"
    );

    let status = cmd
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("failed to launch git difftool")?;

    if !status.success() {
        bail!("git difftool exited with status {status}");
    }
    Ok(())
}
