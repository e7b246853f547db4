//! Entry point for the oceanctl binary.
//!
//! Parses the flag set, loads credentials, and runs every requested
//! command in order. Commands execute strictly sequentially; there is no
//! background work.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use oceanctl::{api::ApiClient, commands, config, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions.as_deref() {
        return commands::completions::run(shell);
    }

    init_logging(cli.verbose);
    tracing::debug!(?cli, "parsed options");

    let credentials = config::load_or_default();
    let api = ApiClient::from_env(credentials.clone())?;
    commands::run(&cli, &credentials, &api).await
}

fn init_logging(verbose: bool) {
    let default = if verbose { "oceanctl=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .without_time()
        .init();
}
