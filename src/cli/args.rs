use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "nusa")]
#[command(about = "Balinese/English translation demo backed by an LLM completion endpoint")]
#[command(version)]
pub struct Args {
    /// Path to config file (defaults to ~/.config/nusa/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<String>,

    /// Completion endpoint base URL
    #[arg(short = 'e', long, env = "NUSA_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long, env = "NUSA_MODEL", global = true)]
    pub model: Option<String>,

    /// Timeout for the completion request, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the translation form over HTTP
    Serve {
        /// Address to listen on (e.g. 127.0.0.1:7860)
        #[arg(short = 'l', long)]
        listen: Option<String>,
    },
    /// Translate a sentence (interactive when no text is given on a terminal)
    Translate {
        /// Sentence to translate (reads from stdin if piped)
        text: Option<String>,

        /// Translation direction (en-ban, ban-en, or e.g. "English->Balinese")
        #[arg(short = 'd', long)]
        direction: Option<String>,
    },
    /// List supported languages and directions
    Languages,
    /// List built-in example sentences
    Examples,
}

impl Args {
    /// CLI overrides to merge over the config file.
    pub fn resolve_options(&self) -> ResolveOptions {
        let listen = match &self.command {
            Command::Serve { listen } => listen.clone(),
            _ => None,
        };

        ResolveOptions {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            timeout_secs: self.timeout,
            listen,
        }
    }
}
