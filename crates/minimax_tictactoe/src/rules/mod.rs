//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): which squares are legal and
//! whether the last move completed a line. Rules are kept apart from board
//! storage so the live game and the search engine share them.

pub mod moves;
pub mod win;

pub use moves::empty_squares;
pub use win::{LINES, is_winning_move, winner};

/// Fewest empty squares that can remain once a line exists.
///
/// A line needs three marks from one side, which takes at least five plies,
/// so a win can only be on the board once `remaining_empty() <= 4`.
pub const WIN_CHECK_THRESHOLD: usize = 4;
