use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "urlsigner", about = "Sign Google Maps API request URLs")]
pub struct Config {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base64url URL signing secret
    #[arg(short, long, env = "URLSIGNER_SECRET", global = true, hide_env_values = true)]
    pub secret: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "URLSIGNER_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign one or more URLs with the same secret
    Sign {
        /// The URLs to sign
        #[arg(required = true)]
        urls: Vec<String>,
    },
}
