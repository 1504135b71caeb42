//! `git` process spawning.
//!
//! Shells out to the system `git` binary so the user's config, hooks and
//! credential setup apply unchanged.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{StagedDiff, Vcs};
use crate::error::GitError;

/// [`Vcs`] backed by the `git` command line.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    workdir: Option<PathBuf>,
}

impl GitCli {
    /// Operate on the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operate on the repository at `workdir`.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    fn command(&self) -> Result<Command, GitError> {
        if which::which("git").is_err() {
            return Err(GitError::NotInstalled);
        }

        let mut cmd = Command::new("git");
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        Ok(cmd)
    }
}

impl Vcs for GitCli {
    fn staged_diff(&self) -> Result<StagedDiff, GitError> {
        let output = self
            .command()?
            .args(["diff", "--cached", "--no-color", "--no-ext-diff"])
            .output()
            .map_err(GitError::SpawnFailed)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::DiffFailed {
                stderr: stderr.trim().to_string(),
            });
        }

        let diff = StagedDiff::new(String::from_utf8_lossy(&output.stdout));
        debug!("Staged diff: {} bytes", diff.byte_len());
        Ok(diff)
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        let status = self
            .command()?
            .args(["commit", "-m", message])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(GitError::SpawnFailed)?;

        if !status.success() {
            return Err(GitError::CommitFailed {
                exit_code: status.code(),
            });
        }

        Ok(())
    }
}
