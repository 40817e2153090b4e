//! Console tic-tac-toe built on the `minimax_tictactoe` engine.
//!
//! # Architecture
//!
//! - **Players**: a closed set of participants (human, random, expert)
//!   behind the [`Player`] trait
//! - **Orchestrator**: the turn loop committing moves to a live game
//! - **Console**: line-based input and output, generic for testing
//! - **Config**: command line and TOML settings for a session

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod orchestrator;
mod players;

pub use cli::Cli;
pub use config::{ConfigError, MatchConfig};
pub use console::Console;
pub use orchestrator::{Orchestrator, run_session, square_guide};
pub use players::{ExpertPlayer, HumanPlayer, Participant, Player, PlayerKind, RandomPlayer};
