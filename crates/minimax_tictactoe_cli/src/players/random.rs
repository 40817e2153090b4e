//! Computer player that picks uniformly among the empty squares.

use super::Player;
use crate::console::Console;
use anyhow::{Context, Result};
use minimax_tictactoe::{Board, Mark, rules::empty_squares};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::io::{BufRead, Write};
use tracing::debug;

/// Random mover with its own generator.
#[derive(Debug)]
pub struct RandomPlayer {
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player drawing from `rng`.
    pub fn new(mark: Mark, rng: StdRng) -> Self {
        Self { mark, rng }
    }

    /// Creates a random player with a generator seeded from `parent`.
    pub fn from_parent(mark: Mark, parent: &mut StdRng) -> Self {
        Self::new(mark, StdRng::from_rng(parent))
    }
}

impl Player for RandomPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Computer"
    }

    fn is_computer(&self) -> bool {
        true
    }

    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize> {
        let square = *empty_squares(board)
            .choose(&mut self.rng)
            .context("No empty squares left to choose from")?;

        debug!(mark = %self.mark, square, "Random move");
        console.say(format!("Computer {} made move to {}", self.mark, square))?;
        Ok(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picks_empty_squares() {
        let mut board = Board::new();
        for square in [0, 1, 2, 4, 6, 8] {
            board.place_mark(square, Mark::X).unwrap();
        }
        let mut player = RandomPlayer::new(Mark::O, StdRng::seed_from_u64(3));
        let mut console = Console::new(std::io::empty(), Vec::new());
        for _ in 0..50 {
            let square = player.choose_move(&board, &mut console).unwrap();
            assert!([3, 5, 7].contains(&square));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut console = Console::new(std::io::empty(), Vec::new());
        let mut a = RandomPlayer::new(Mark::X, StdRng::seed_from_u64(42));
        let mut b = RandomPlayer::new(Mark::X, StdRng::seed_from_u64(42));
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, &mut console).unwrap(),
                b.choose_move(&board, &mut console).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for square in 0..9 {
            board.place_mark(square, Mark::O).unwrap();
        }
        let mut console = Console::new(std::io::empty(), Vec::new());
        let mut player = RandomPlayer::new(Mark::X, StdRng::seed_from_u64(0));
        assert!(player.choose_move(&board, &mut console).is_err());
    }
}
