//! aicommit - A CLI tool that drafts Conventional Commits messages from staged changes.
//!
//! # Overview
//!
//! aicommit reads `git diff --cached`, asks a chat completions API for a commit
//! message, shows the suggestion, and runs `git commit` once the operator
//! confirms with `y`.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod llm;
pub mod workflow;

// Re-export commonly used types
pub use commit::{CommitMessage, build_commit_prompt};
pub use config::Config;
pub use error::{CompletionError, ConfigError, GitError, WorkflowError};
pub use git::{GitCli, StagedDiff, Vcs};
pub use llm::{Completer, CompletionClient};
pub use workflow::{ConsoleOperator, Operator, Outcome, run_commit};
