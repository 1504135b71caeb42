//! Prompt construction for AI-generated commit messages.

use crate::git::StagedDiff;

/// Instructions and few-shot examples placed ahead of the diff.
const COMMIT_PROMPT_TEMPLATE: &str = r#"You are a code-aware assistant.
Convert the following git diff into a clear, professional commit message.

Rules:
- Use the Conventional Commits format: type(scope): short description
- Keep the summary line under 72 characters.
- Use lowercase, imperative style ("add", "fix", "update", etc.)
- Add a one-line body only if useful.
- Return ONLY the commit message, with no commentary or formatting.

Examples:
Diff: update login validation
Commit: fix(auth): handle missing user tokens correctly

Diff: add API endpoint for user preferences
Commit: feat(api): add endpoint for user preferences

Now here is the diff:
"#;

/// Build the LLM prompt for generating a commit message.
///
/// The diff is appended unmodified after the template. Large diffs are not
/// truncated, so very large staged sets may exceed the model's context.
pub fn build_commit_prompt(diff: &StagedDiff) -> String {
    let mut prompt = String::with_capacity(COMMIT_PROMPT_TEMPLATE.len() + diff.as_str().len());
    prompt.push_str(COMMIT_PROMPT_TEMPLATE);
    prompt.push_str(diff.as_str());
    prompt
}
