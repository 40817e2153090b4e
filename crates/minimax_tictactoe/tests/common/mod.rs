//! Shared helpers for the integration tests.

#![allow(dead_code)]

use minimax_tictactoe::{Board, Cell, Game, Mark, rules::empty_squares};
use std::collections::HashSet;

/// Parses a nine-character board, `X`/`O` for marks and anything else empty.
pub fn board(cells: &str) -> Board {
    assert_eq!(cells.chars().count(), 9, "board needs nine cells: {cells:?}");
    let mut parsed = [Cell::Empty; 9];
    for (cell, ch) in parsed.iter_mut().zip(cells.chars()) {
        *cell = match ch {
            'X' => Cell::Occupied(Mark::X),
            'O' => Cell::Occupied(Mark::O),
            _ => Cell::Empty,
        };
    }
    Board::from_cells(parsed)
}

/// Every distinct game still in progress that can arise from an empty board.
pub fn reachable_in_progress() -> Vec<Game> {
    let mut seen = HashSet::new();
    let mut stack = vec![Game::new()];
    let mut found = Vec::new();

    while let Some(game) = stack.pop() {
        if game.status().is_over() || !seen.insert(game.board().clone()) {
            continue;
        }
        for square in empty_squares(game.board()) {
            let mut next = game.clone();
            next.make_move(square).unwrap();
            stack.push(next);
        }
        found.push(game);
    }

    found
}
