use crate::bridge::ChatBridge;
use crate::cli::Args;
use crate::models::chat::Turn;
use std::error::Error;
use std::io::{ self, Write };
use tokio::io::{ AsyncBufReadExt, BufReader };

fn prompt() {
    print!("you> ");
    io::stdout().flush().ok();
}

/// Interactive terminal loop around the bridge. Owns the conversation
/// history and appends one completed turn per exchange; replies (including
/// diagnostic strings) are printed as-is.
pub async fn run(bridge: &ChatBridge, args: &Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Connection Status: {}", bridge.status().message);
    println!("Ollama Host: {}", args.ollama_host);
    println!("Model: {}", args.model);
    println!("Type a message, or \"exit\" to quit.");

    let mut history: Vec<Turn> = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            prompt();
            continue;
        }
        if message == "exit" {
            break;
        }

        let reply = bridge.chat(message, &history).await;
        println!("assistant> {}", reply);

        history.push(Turn::new(message, reply));
        prompt();
    }

    Ok(())
}
