//! Commit workflow: read staged changes, draft a message, confirm, commit.
//!
//! Runs strictly in sequence:
//!
//! ```text
//! Idle -> DiffRead -> PromptBuilt -> AwaitingCompletion -> AwaitingConfirmation
//!                                                            -> Committed | Aborted
//! ```
//!
//! An empty diff ends the run from `Idle`. A missing API key never reaches
//! this module: a [`Completer`] cannot be built without one.

pub mod operator;

use std::fmt;

use tracing::{debug, warn};

pub use operator::{CONFIRM_QUESTION, ConsoleOperator, Operator, is_affirmative};

use crate::commit::build_commit_prompt;
use crate::error::WorkflowError;
use crate::git::Vcs;
use crate::llm::Completer;

/// Notice printed when nothing is staged.
pub const NO_STAGED_CHANGES: &str = "No staged changes found. Run `git add` first.";

/// Intermediate states of a run, logged on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    DiffRead,
    PromptBuilt,
    AwaitingCompletion,
    AwaitingConfirmation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::DiffRead => "diff read",
            Stage::PromptBuilt => "prompt built",
            Stage::AwaitingCompletion => "awaiting completion",
            Stage::AwaitingConfirmation => "awaiting confirmation",
        };
        f.write_str(name)
    }
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The commit was created with this message.
    Committed(String),
    /// The operator declined the suggestion.
    Aborted,
    /// Nothing was staged; no request was made.
    NoStagedChanges,
}

fn enter(stage: Stage) {
    debug!(%stage, "Entering stage");
}

/// Run one pass of the commit workflow.
pub async fn run_commit<V, C, O>(
    vcs: &V,
    completer: &C,
    operator: &mut O,
) -> Result<Outcome, WorkflowError>
where
    V: Vcs + ?Sized,
    C: Completer + ?Sized,
    O: Operator + ?Sized,
{
    enter(Stage::Idle);
    let diff = vcs.staged_diff()?;
    if diff.is_blank() {
        operator.notice(NO_STAGED_CHANGES);
        return Ok(Outcome::NoStagedChanges);
    }
    enter(Stage::DiffRead);

    let prompt = build_commit_prompt(&diff);
    drop(diff);
    enter(Stage::PromptBuilt);

    operator.notice("Generating commit message...");
    enter(Stage::AwaitingCompletion);
    let message = completer.complete(&prompt).await?;

    for warning in message.lint() {
        warn!("{warning}");
    }

    enter(Stage::AwaitingConfirmation);
    operator.present(&message);
    let answer = operator
        .ask(CONFIRM_QUESTION)
        .map_err(WorkflowError::Prompt)?;

    if !is_affirmative(&answer) {
        operator.notice("Commit aborted.");
        return Ok(Outcome::Aborted);
    }

    vcs.commit(message.as_str())?;
    operator.notice("Commit created successfully.");
    Ok(Outcome::Committed(message.as_str().to_string()))
}
