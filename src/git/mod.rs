//! Staged-change reading and commit creation via the system `git` binary.

pub mod subprocess;

pub use subprocess::GitCli;

use crate::error::GitError;

/// Unified diff text of the staged changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedDiff(String);

impl StagedDiff {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The diff exactly as git produced it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when there is nothing staged (empty or whitespace-only output).
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Size in bytes, whitespace included.
    pub fn byte_len(&self) -> usize {
        self.0.len()
    }
}

/// The two version-control operations the commit workflow needs.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// Read the diff of the staged changes.
    fn staged_diff(&self) -> Result<StagedDiff, GitError>;

    /// Create a commit with `message`, streaming git's output to the terminal.
    fn commit(&self, message: &str) -> Result<(), GitError>;
}
