//! Error types for aicommit modules using thiserror.

use thiserror::Error;

/// Exit code for a missing API key.
pub const EXIT_MISSING_CREDENTIAL: u8 = 1;

/// Exit code shared by every other fatal error.
pub const EXIT_FATAL: u8 = 2;

/// Errors from configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing OpenAI API key. Set OPENAI_API_KEY in your environment or .env file.")]
    MissingApiKey,
}

/// Errors from git subprocess operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found in PATH. Install git and try again.")]
    NotInstalled,

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git diff --cached failed: {stderr}")]
    DiffFailed { stderr: String },

    #[error("git commit failed ({})", exit_code.map_or("terminated by signal".to_string(), |c| format!("exit code {c}")))]
    CommitFailed { exit_code: Option<i32> },
}

/// Errors from the chat completions API.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Request to completion API failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Completion API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode completion response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("No commit message returned from the completion API")]
    EmptyResponse,
}

/// Errors that end a commit run.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}

impl WorkflowError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            WorkflowError::Config(ConfigError::MissingApiKey) => EXIT_MISSING_CREDENTIAL,
            _ => EXIT_FATAL,
        }
    }
}
