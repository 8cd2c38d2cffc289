//! Tic-tac-toe console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Console};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), cli.first_player.into());

    let outcome = console.run().context("Game ended before a result")?;
    info!(%outcome, "Exiting");
    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` overrides `--log-level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
