pub mod ollama;

use async_trait::async_trait;
use thiserror::Error;

/// Connection parameters for the inference server, built once from the
/// configuration surface at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub base_url: String,
    pub model: String,
}

impl ServerConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    /// The endpoint answered with a non-200 status.
    #[error("HTTP {0}")]
    Status(u16),

    /// Timeout, DNS failure, refused connection, or an unparseable body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text. `None` when the server answered 200 but the body
    /// carried no `response` field.
    pub response: Option<String>,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Names of the models the server currently serves.
    async fn list_models(&self) -> Result<Vec<String>, LlmError>;

    async fn complete(&self, prompt: &str) -> Result<CompletionResponse, LlmError>;
}
