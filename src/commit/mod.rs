//! AI-generated commit messages: prompt construction and the message type.

pub mod message;
pub mod prompt;

pub use message::{CommitMessage, MAX_SUMMARY_LENGTH};
pub use prompt::build_commit_prompt;
