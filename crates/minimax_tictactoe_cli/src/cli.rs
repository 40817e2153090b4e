//! Command-line interface for the console game.

use crate::players::PlayerKind;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal against humans, a random mover or perfect play
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays X: human (h), random (c) or expert (s). Asked if omitted.
    #[arg(short = 'x', long)]
    pub player_x: Option<PlayerKind>,

    /// Who plays O: human (h), random (c) or expert (s). Asked if omitted.
    #[arg(short = 'o', long)]
    pub player_o: Option<PlayerKind>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the random player
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Play a single game instead of offering a rematch
    #[arg(long)]
    pub once: bool,
}
