//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use std::fmt;

/// Number of squares on the board.
pub const SQUARES: usize = 9;

/// One of the two symbols a game assigns to its sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing played here yet.
    #[default]
    Empty,
    /// Square holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str(" "),
            Cell::Occupied(mark) => write!(f, "{mark}"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are indexed 0-8 in row-major order: the row of square `i` is
/// `i / 3` and its column is `i % 3`. The board holds marks only; whose turn
/// it is and who has won are derived by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; SQUARES],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; SQUARES]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `square`.
    ///
    /// # Panics
    ///
    /// Panics if `square` is not in `0..9`.
    pub fn cell_at(&self, square: usize) -> Cell {
        assert!(square < SQUARES, "square {square} is off the board");
        self.cells[square]
    }

    /// Gets the cell at `square`, or `None` when it is off the board.
    pub fn get(&self, square: usize) -> Option<Cell> {
        self.cells.get(square).copied()
    }

    /// Places `mark` on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfRange`] for a square outside `0..9` and
    /// [`BoardError::Occupied`] when the square already holds a mark. The
    /// board is left untouched in both cases.
    pub fn place_mark(&mut self, square: usize, mark: Mark) -> Result<(), BoardError> {
        match self.cells.get_mut(square) {
            None => Err(BoardError::OutOfRange { square }),
            Some(Cell::Occupied(_)) => Err(BoardError::Occupied { square }),
            Some(cell) => {
                *cell = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Resets a square to empty. Only the search's scratch guard undoes moves.
    pub(crate) fn clear(&mut self, square: usize) {
        if let Some(cell) = self.cells.get_mut(square) {
            *cell = Cell::Empty;
        }
    }

    /// Checks if a square is empty. Off-board squares are never empty.
    pub fn is_empty(&self, square: usize) -> bool {
        matches!(self.get(square), Some(Cell::Empty))
    }

    /// Returns true while at least one square is still open.
    pub fn has_empty_squares(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Number of open squares.
    pub fn remaining_empty(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Empty).count()
    }

    /// Number of marks placed so far.
    pub fn marks_placed(&self) -> usize {
        SQUARES - self.remaining_empty()
    }

    /// Returns an independent copy of the board.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; SQUARES] {
        &self.cells
    }
}

impl fmt::Display for Board {
    /// Renders the board as three rows separated by rules:
    ///
    /// ```text
    ///  X | O | X
    /// ---+---+---
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            write!(f, " {} | {} | {}", cells[0], cells[1], cells[2])?;
            if row < 2 {
                f.write_str("\n---+---+---\n")?;
            }
        }
        Ok(())
    }
}
