use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the Ollama server (e.g., http://localhost:11434).
    /// The default is a placeholder; the startup probe fails cleanly until
    /// a real host is configured.
    #[arg(long, env = "OLLAMA_HOST", default_value = "http://")]
    pub ollama_host: String,

    /// Model name to chat with. Matched as a substring of the names the
    /// server reports, so a tag suffix like "-q4" still counts.
    #[arg(long, env = "MODEL_NAME", default_value = "gpt-oss:20b")]
    pub model: String,
}
