use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use urlsigner::{
    commands::{prompt, sign_all},
    config::{Command, Config},
    UrlSigner,
};

fn main() -> anyhow::Result<()> {
    let cli = Config::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        Some(Command::Sign { urls }) => {
            let secret = cli
                .secret
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("URLSIGNER_SECRET is required for signing"))?;

            let signer = UrlSigner::new(secret)?;
            debug!(key_len = signer.key_len(), "decoded signing secret");

            for url in sign_all(&signer, urls)? {
                println!("{}", url);
            }
        }
        None => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();

            let url = prompt(&mut input, &mut output, "URL to Sign: ")?;
            let secret = match &cli.secret {
                Some(secret) => secret.clone(),
                None => prompt(&mut input, &mut output, "URL signing secret: ")?,
            };

            let signer = UrlSigner::new(&secret)?;
            debug!(key_len = signer.key_len(), %url, "signing url");

            println!("Signed URL: {}", signer.sign_url(&url)?);
        }
    }

    Ok(())
}
