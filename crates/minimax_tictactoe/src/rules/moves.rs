//! Legal move enumeration.

use crate::types::{Board, SQUARES};

/// Returns the empty squares of `board` in ascending order.
///
/// The order is the order the search engine tries candidates in, and so
/// decides which of two equally scored moves is chosen: the lower index wins.
pub fn empty_squares(board: &Board) -> Vec<usize> {
    (0..SQUARES).filter(|&square| board.is_empty(square)).collect()
}
