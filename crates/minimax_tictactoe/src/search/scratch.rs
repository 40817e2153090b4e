//! Scoped candidate moves on the search's scratch board.

use crate::error::BoardError;
use crate::types::{Board, Mark};
use std::ops::{Deref, DerefMut};

/// A mark placed on the scratch board for the lifetime of the guard.
///
/// Creating the guard places the mark; dropping it puts the square back to
/// empty. The board is reachable only through the guard while it lives, so
/// every exit from a search frame (normal return, a pruning `break`, or an
/// error propagated with `?`) undoes the candidate move.
pub(crate) struct ScratchMark<'a> {
    board: &'a mut Board,
    square: usize,
}

impl<'a> ScratchMark<'a> {
    /// Places `mark` on `square`, or fails without touching the board.
    pub(crate) fn place(board: &'a mut Board, square: usize, mark: Mark) -> Result<Self, BoardError> {
        board.place_mark(square, mark)?;
        Ok(Self { board, square })
    }
}

impl Deref for ScratchMark<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScratchMark<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScratchMark<'_> {
    fn drop(&mut self) {
        self.board.clear(self.square);
    }
}
