//! The live game: one board, the side to move and the winner once known.

use crate::error::MoveError;
use crate::rules::{WIN_CHECK_THRESHOLD, is_winning_move};
use crate::types::{Board, Mark};
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Tic-tac-toe game engine. X moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    winner: Option<Mark>,
}

impl Game {
    /// Creates a new game with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            winner: None,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the winner, recorded on the move that completed a line.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if !self.board.has_empty_squares() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Plays the current side's mark on `square` and returns the new status.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, or
    /// [`MoveError::Board`] when the square is off the board or occupied.
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, square: usize) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }

        let mark = self.to_move;
        self.board.place_mark(square, mark)?;

        if self.board.remaining_empty() <= WIN_CHECK_THRESHOLD
            && is_winning_move(&self.board, square)
        {
            info!(%mark, square, "Line completed");
            self.winner = Some(mark);
        } else {
            self.to_move = mark.opponent();
        }

        Ok(self.status())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    fn play(squares: &[usize]) -> Game {
        let mut game = Game::new();
        for &square in squares {
            game.make_move(square).unwrap();
        }
        game
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.make_move(4).unwrap();
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_occupied_square_rejected_without_losing_turn() {
        let mut game = play(&[4]);
        assert_eq!(
            game.make_move(4),
            Err(MoveError::Board {
                source: BoardError::Occupied { square: 4 }
            })
        );
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_win_recorded_once() {
        let mut game = play(&[0, 3, 1, 4]);
        assert_eq!(game.make_move(2), Ok(GameStatus::Won(Mark::X)));
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.make_move(5), Err(MoveError::GameOver));
        assert_eq!(game.winner(), Some(Mark::X));
    }

    #[test]
    fn test_full_board_is_draw() {
        // X O X / X O O / O X X
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // X O X / O X O / O X X: X completes the main diagonal on the ninth move.
        let game = play(&[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }
}
