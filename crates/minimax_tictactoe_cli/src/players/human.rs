//! Human player that types squares at the console.

use super::Player;
use crate::console::Console;
use anyhow::{Context, Result, bail};
use minimax_tictactoe::{Board, Mark, SQUARES};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player using console input.
#[derive(Debug)]
pub struct HumanPlayer {
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a human player for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Player for HumanPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "Human"
    }

    fn is_computer(&self) -> bool {
        false
    }

    /// Prompts until the answer names an empty square.
    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize> {
        let question = format!("{}'s Move Now! Choose your move (0-8): ", self.mark);
        loop {
            let Some(answer) = console.prompt(&question).context("Failed to read move")? else {
                bail!("Input closed before {} chose a move", self.mark);
            };

            match answer.parse::<usize>() {
                Ok(square) if square < SQUARES && board.is_empty(square) => return Ok(square),
                Ok(square) if square < SQUARES => {
                    debug!(square, "Square taken");
                    console.say("That Square is not open! Try Again!")?;
                }
                _ => {
                    debug!(%answer, "Unreadable move");
                    console.say("Invalid Move! Try Again")?;
                }
            }
        }
    }
}
