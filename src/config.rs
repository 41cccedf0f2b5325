use std::path::Path;

use anyhow::{Context, Result};
use git2::Repository;

/// Dircompare configuration values sourced from git config.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Difftool override for `git difftool --dir-diff`; `None` defers to
    /// git's own difftool configuration.
    pub tool: Option<String>,
    /// Maximum number of refs listed by the reference picker.
    pub ref_limit: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tool: None,
            ref_limit: 100,
        }
    }
}

impl CompareConfig {
    /// Load configuration from git config with precedence: local → global → system.
    ///
    /// # Errors
    /// Returns an error if repository discovery or reading config fails.
    pub fn load(repo_path: &Path) -> Result<Self> {
        let repo = Repository::discover(repo_path).with_context(|| {
            format!(
                "failed to discover Git repository from {}",
                repo_path.display()
            )
        })?;

        let cfg = repo.config().context("failed to open git config")?;

        let mut out = Self::default();

        if let Ok(v) = cfg.get_string("dircompare.tool")
            && !v.is_empty()
        {
            out.tool = Some(v);
        }
        if let Ok(v) = cfg.get_i64("dircompare.ref-limit")
            && v > 0
            && let Ok(vu) = usize::try_from(v)
        {
            out.ref_limit = vu;
        }

        Ok(out)
    }
}
