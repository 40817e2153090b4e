//! Computer player driven by minimax search.

use super::Player;
use crate::console::Console;
use anyhow::{Context, Result};
use minimax_tictactoe::{Board, Mark, Minimax};
use std::io::{BufRead, Write};
use tracing::info;

/// Perfect player searching on behalf of its own mark.
#[derive(Debug)]
pub struct ExpertPlayer {
    engine: Minimax,
}

impl ExpertPlayer {
    /// Creates an expert for `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            engine: Minimax::new(mark),
        }
    }
}

impl Player for ExpertPlayer {
    fn mark(&self) -> Mark {
        self.engine.me()
    }

    fn name(&self) -> &str {
        "SmartComputer"
    }

    fn is_computer(&self) -> bool {
        true
    }

    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        _console: &mut Console<R, W>,
    ) -> Result<usize> {
        let report = self
            .engine
            .best_move(board)
            .with_context(|| format!("{} cannot move on this board", self.mark()))?;

        info!(
            mark = %self.mark(),
            nodes = report.nodes(),
            cutoffs = report.cutoffs(),
            score = report.result().score(),
            "Search finished"
        );

        report
            .result()
            .square()
            .context("Search returned no square for a board in play")
    }
}
