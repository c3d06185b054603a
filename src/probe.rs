use crate::llm::{ ChatClient, LlmError };

/// Outcome of the one-time startup check. Computed once, then handed to the
/// bridge by value; never recomputed or mutated during the run.
#[derive(Debug, Clone)]
pub struct ConnectionStatus {
    pub ok: bool,
    pub message: String,
}

/// Ask the server for its model listing and check that `model` is served.
///
/// Matching is substring containment, not equality, so a configured
/// "gpt-oss:20b" still matches a listed "gpt-oss:20b-q4". Every failure is
/// folded into the returned status; this never errors.
pub async fn probe(client: &dyn ChatClient, model: &str) -> ConnectionStatus {
    match client.list_models().await {
        Ok(names) => {
            if names.iter().any(|name| name.contains(model)) {
                ConnectionStatus {
                    ok: true,
                    message: format!("Connected to Ollama! Found {}", model),
                }
            } else {
                ConnectionStatus {
                    ok: false,
                    message: format!("Model {} not found. Available: {:?}", model, names),
                }
            }
        }
        Err(LlmError::Status(code)) => ConnectionStatus {
            ok: false,
            message: format!("Ollama server error: HTTP {}", code),
        },
        Err(e) => ConnectionStatus {
            ok: false,
            message: format!("Connection failed: {}", e),
        },
    }
}
