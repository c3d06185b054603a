pub mod bridge;
pub mod cli;
pub mod console;
pub mod llm;
pub mod models;
pub mod probe;

use bridge::ChatBridge;
use cli::Args;
use llm::ServerConfig;
use llm::ollama::OllamaClient;
use log::{ info, warn };
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Ollama Host: {}", args.ollama_host);
    info!("Model: {}", args.model);
    info!("-------------------------");

    let config = ServerConfig::new(&args.ollama_host, &args.model);
    let client = Arc::new(OllamaClient::new(&config));

    // Probed once; every later chat call reuses this result.
    let status = probe::probe(client.as_ref(), &config.model).await;
    if status.ok {
        info!("{}", status.message);
    } else {
        warn!("{}", status.message);
    }

    let bridge = ChatBridge::new(client, status);
    console::run(&bridge, &args).await
}
