use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ht_cli::commands::{config, session};
use ht_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with the menu on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut settings = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(capacity) = cli.capacity {
        settings.capacity = capacity;
    }
    tracing::debug!(?settings, "loaded configuration");

    match &cli.command {
        Some(Commands::Config) => {
            config::run(&mut io::stdout().lock(), &settings)?;
        }
        Some(Commands::Session) | None => {
            session::run(io::stdin().lock(), io::stdout().lock(), &settings, cli.json)?;
        }
    }

    Ok(())
}
