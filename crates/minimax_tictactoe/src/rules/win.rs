//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};

/// Every line on the board: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark filling all of `line`, if one does.
fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Mark> {
    let mark = board.cell_at(a).mark()?;
    (board.cell_at(b).mark() == Some(mark) && board.cell_at(c).mark() == Some(mark))
        .then_some(mark)
}

/// Checks whether the mark on `last_square` completed a line.
///
/// Only the lines through `last_square` are inspected: its row, its column,
/// and for even squares the diagonals it lies on (square 4 is on both). A line
/// of empty squares never counts.
///
/// # Panics
///
/// Panics if `last_square` is not in `0..9`.
pub fn is_winning_move(board: &Board, last_square: usize) -> bool {
    let row_start = (last_square / 3) * 3;
    if line_owner(board, [row_start, row_start + 1, row_start + 2]).is_some() {
        return true;
    }

    let col_start = last_square % 3;
    if line_owner(board, [col_start, col_start + 3, col_start + 6]).is_some() {
        return true;
    }

    if last_square % 2 == 0 {
        if matches!(last_square, 0 | 4 | 8) && line_owner(board, [0, 4, 8]).is_some() {
            return true;
        }
        if matches!(last_square, 2 | 4 | 6) && line_owner(board, [2, 4, 6]).is_some() {
            return true;
        }
    }

    false
}

/// Scans the whole board for a completed line and returns its owner.
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}
