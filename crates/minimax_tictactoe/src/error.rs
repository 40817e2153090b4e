//! Error types for board mutation, live games and search.

use derive_more::{Display, Error};

/// A mark could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Square index is not in `0..9`.
    #[display("Square {square} is out of range (must be 0-8)")]
    OutOfRange {
        /// The rejected square.
        square: usize,
    },

    /// Square already holds a mark.
    #[display("Square {square} is already occupied")]
    Occupied {
        /// The rejected square.
        square: usize,
    },
}

/// A move could not be committed to a live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The board rejected the mark.
    #[display("{source}")]
    Board {
        /// Underlying board error.
        source: BoardError,
    },
}

impl From<BoardError> for MoveError {
    fn from(source: BoardError) -> Self {
        MoveError::Board { source }
    }
}

/// The search engine was asked for a move it cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Board is full.
    #[display("No legal moves remain")]
    NoLegalMoves,

    /// A line is already complete.
    #[display("Board already has a winner")]
    AlreadyWon,

    /// A scratch mutation failed.
    #[display("Scratch board rejected a move: {source}")]
    Board {
        /// Underlying board error.
        source: BoardError,
    },
}

impl From<BoardError> for SearchError {
    fn from(source: BoardError) -> Self {
        SearchError::Board { source }
    }
}
