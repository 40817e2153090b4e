//! Console tic-tac-toe.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so they never
//! interleave with the board on stdout.

use anyhow::Result;
use clap::Parser;
use minimax_tictactoe_cli::{Cli, Console, MatchConfig, run_session};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MatchConfig::resolve(&cli)?;
    info!(?config, once = cli.once, "Starting session");

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_session(&config, cli.once, &mut console)?;
    Ok(())
}
