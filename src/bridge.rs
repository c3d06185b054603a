use crate::llm::{ ChatClient, LlmError };
use crate::models::chat::Turn;
use crate::probe::ConnectionStatus;
use log::error;
use std::sync::Arc;

/// Relays one chat turn to the inference server. Holds the client and the
/// startup probe result; conversation history stays with the caller.
pub struct ChatBridge {
    client: Arc<dyn ChatClient>,
    status: ConnectionStatus,
}

/// Flatten prior turns plus the new message into a single prompt. Two lines
/// per turn, then the new message, then a bare "Assistant:" cue so the model
/// continues in that role. Full history is always included, uncapped.
pub fn build_prompt(history: &[Turn], message: &str) -> String {
    let mut conversation = Vec::with_capacity(history.len() * 2 + 2);
    for turn in history {
        conversation.push(format!("User: {}", turn.user));
        conversation.push(format!("Assistant: {}", turn.assistant));
    }
    conversation.push(format!("User: {}", message));
    conversation.push("Assistant:".to_string());
    conversation.join("\n")
}

impl ChatBridge {
    pub fn new(client: Arc<dyn ChatClient>, status: ConnectionStatus) -> Self {
        Self { client, status }
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Answer one turn. Every outcome, including every failure, comes back
    /// as a displayable string; this never errors and never retries.
    pub async fn chat(&self, message: &str, history: &[Turn]) -> String {
        if !self.status.ok {
            return format!("Ollama connection failed: {}", self.status.message);
        }

        let prompt = build_prompt(history, message);

        match self.client.complete(&prompt).await {
            Ok(completion) => completion.response
                .unwrap_or_else(|| "No response generated".to_string()),
            Err(LlmError::Status(code)) => format!("Ollama API error: HTTP {}", code),
            Err(e) => {
                error!("Error generating response: {}", e);
                format!("Sorry, I encountered an error while processing your request: {}", e)
            }
        }
    }
}
