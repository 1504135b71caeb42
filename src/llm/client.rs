//! Chat completions API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commit::CommitMessage;
use crate::config::Config;
use crate::error::CompletionError;

/// Trait for turning a prompt into a commit message.
///
/// This abstraction allows mocking the remote service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Completer: Send + Sync {
    /// Send `prompt` and return the first candidate, trimmed.
    async fn complete(&self, prompt: &str) -> Result<CommitMessage, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct CompletionClient {
    client: Client,
    config: Config,
}

impl CompletionClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl Completer for CompletionClient {
    async fn complete(&self, prompt: &str) -> Result<CommitMessage, CompletionError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            endpoint = %self.config.endpoint,
            model = %self.model(),
            "Sending {} char prompt",
            prompt.len()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(CompletionError::Request)?;

        let status = response.status();
        debug!("Completion API responded with {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = if body.trim().is_empty() {
                "(empty response body)".to_string()
            } else {
                body.trim().to_string()
            };
            return Err(CompletionError::Status { status, body });
        }

        let chat: ChatResponse = response.json().await.map_err(CompletionError::Decode)?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        CommitMessage::parse(&content).ok_or(CompletionError::EmptyResponse)
    }
}
