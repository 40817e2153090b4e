//! Tic-tac-toe board model and perfect-play search.
//!
//! The crate holds the pure game logic and no I/O:
//!
//! - **Board**: nine squares in row-major order, each empty or holding a mark
//! - **Rules**: legal move enumeration and last-move win detection
//! - **Search**: minimax with alpha-beta pruning, scored for a fixed side
//! - **Game**: the live board, the side to move and the winner once known
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Game, GameStatus, Mark, Minimax};
//!
//! let mut game = Game::new();
//! let engine = Minimax::new(Mark::X);
//! let report = engine.best_move(game.board())?;
//! let square = report.result().square().expect("board is in play");
//! assert_eq!(game.make_move(square)?, GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
pub mod search;
mod types;

pub use error::{BoardError, MoveError, SearchError};
pub use game::{Game, GameStatus};
pub use search::{INFINITY, Minimax, SearchReport, SearchResult, terminal_score};
pub use types::{Board, Cell, Mark, SQUARES};
