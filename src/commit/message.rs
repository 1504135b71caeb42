//! The commit message returned by the completion API.

use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Recommended maximum length of the summary line.
pub const MAX_SUMMARY_LENGTH: usize = 72;

/// Conventional commit summary: `type(scope)!: description`, scope and `!` optional.
static CONVENTIONAL_SUMMARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(\([^()\s]+\))?!?: \S").expect("valid regex")
});

/// A trimmed, non-empty commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage(String);

impl CommitMessage {
    /// Trim `text`, returning `None` if nothing is left.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First line of the message.
    pub fn summary(&self) -> &str {
        self.0.lines().next().unwrap_or_default()
    }

    /// Advisory style checks on the summary line.
    ///
    /// Returns human-readable warnings. These never block a commit; the
    /// format requested in the prompt is not enforced.
    pub fn lint(&self) -> Vec<String> {
        let summary = self.summary();
        let mut warnings = Vec::new();

        if !CONVENTIONAL_SUMMARY.is_match(summary) {
            warnings.push(format!(
                "summary line does not follow `type(scope): description`: {summary}"
            ));
        }

        let length = summary.chars().count();
        if length > MAX_SUMMARY_LENGTH {
            warnings.push(format!(
                "summary line is {length} characters (recommended under {MAX_SUMMARY_LENGTH})"
            ));
        }

        warnings
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
