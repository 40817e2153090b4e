//! Minimax search with alpha-beta pruning.
//!
//! Scores are always taken from the point of view of one fixed side, `me`,
//! for the whole of a search; only the side to move alternates with depth.
//! A won position scores `remaining_empty + 1`, positive when `me` made the
//! winning move and negative otherwise, so faster wins and slower losses are
//! preferred. A full board with no line scores 0.

mod scratch;

use crate::error::SearchError;
use crate::rules::{WIN_CHECK_THRESHOLD, empty_squares, is_winning_move, winner};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use scratch::ScratchMark;
use tracing::{debug, instrument};

/// Bound used for the initial search window, `[-INFINITY, INFINITY]`.
pub const INFINITY: i32 = i32::MAX;

/// Square chosen by a search together with its evaluation.
///
/// `square` is `None` for a terminal position, where there is no move to
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    square: Option<usize>,
    score: i32,
}

impl SearchResult {
    fn terminal(score: i32) -> Self {
        Self {
            square: None,
            score,
        }
    }

    /// Starting point for a node before any candidate has been tried.
    fn worst_for(maximizing: bool) -> Self {
        Self::terminal(if maximizing { -INFINITY } else { INFINITY })
    }

    /// The chosen square, or `None` for a terminal evaluation.
    pub fn square(&self) -> Option<usize> {
        self.square
    }

    /// Evaluation from the searching side's point of view.
    pub fn score(&self) -> i32 {
        self.score
    }
}

/// Outcome of one top-level search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchReport {
    /// Best square and its score.
    result: SearchResult,
    /// Positions visited, the root included.
    nodes: u64,
    /// Times a node stopped enumerating candidates because `beta <= alpha`.
    cutoffs: u64,
}

#[derive(Debug, Default)]
struct Counters {
    nodes: u64,
    cutoffs: u64,
}

/// Scores `board` if the game is over, from `me`'s point of view.
///
/// `last_square` is the square of the move that produced `board`, if any.
/// Win detection only runs once a line is possible (at most
/// [`WIN_CHECK_THRESHOLD`] empty squares). Returns `None` for a position that
/// still has to be searched.
pub fn terminal_score(board: &Board, last_square: Option<usize>, me: Mark) -> Option<i32> {
    let remaining = board.remaining_empty();

    if let Some(square) = last_square
        && remaining <= WIN_CHECK_THRESHOLD
        && is_winning_move(board, square)
        && let Some(mover) = board.cell_at(square).mark()
    {
        let score = remaining as i32 + 1;
        return Some(if mover == me { score } else { -score });
    }

    (remaining == 0).then_some(0)
}

/// Exhaustive tic-tac-toe player searching on behalf of one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    me: Mark,
    alpha_beta_pruning: bool,
}

impl Minimax {
    /// Creates a searcher maximizing for `me`, with pruning enabled.
    pub fn new(me: Mark) -> Self {
        Self {
            me,
            alpha_beta_pruning: true,
        }
    }

    /// Enables or disables alpha-beta pruning.
    ///
    /// With pruning off the same procedure visits every position, which yields
    /// plain minimax. The returned score is identical either way.
    pub fn with_alpha_beta_pruning(mut self, enabled: bool) -> Self {
        self.alpha_beta_pruning = enabled;
        self
    }

    /// The mark scores are computed for.
    pub fn me(&self) -> Mark {
        self.me
    }

    /// Finds the best square for `me` to play on `board`.
    ///
    /// # Errors
    ///
    /// The board must still be in play: [`SearchError::AlreadyWon`] if a line
    /// is complete and [`SearchError::NoLegalMoves`] if it is full.
    #[instrument(skip(self, board), fields(me = %self.me, empty = board.remaining_empty()))]
    pub fn best_move(&self, board: &Board) -> Result<SearchReport, SearchError> {
        if winner(board).is_some() {
            return Err(SearchError::AlreadyWon);
        }
        if !board.has_empty_squares() {
            return Err(SearchError::NoLegalMoves);
        }

        self.search(board, -INFINITY, INFINITY, self.me)
    }

    /// Runs the search from `board` with `to_move` to play, within the window
    /// `[alpha, beta]`.
    ///
    /// The live board is never touched: candidates are tried on a private
    /// copy. No precondition is checked, so a terminal `board` yields a result
    /// without a square.
    #[instrument(skip(self, board), fields(me = %self.me, pruning = self.alpha_beta_pruning))]
    pub fn search(
        &self,
        board: &Board,
        alpha: i32,
        beta: i32,
        to_move: Mark,
    ) -> Result<SearchReport, SearchError> {
        let mut scratch = board.snapshot();
        let mut counters = Counters::default();
        let result = self.node(&mut scratch, None, alpha, beta, to_move, &mut counters)?;

        debug!(
            square = ?result.square,
            score = result.score,
            nodes = counters.nodes,
            cutoffs = counters.cutoffs,
            "Search complete"
        );

        Ok(SearchReport {
            result,
            nodes: counters.nodes,
            cutoffs: counters.cutoffs,
        })
    }

    fn node(
        &self,
        board: &mut Board,
        last_square: Option<usize>,
        mut alpha: i32,
        mut beta: i32,
        to_move: Mark,
        counters: &mut Counters,
    ) -> Result<SearchResult, SearchError> {
        counters.nodes += 1;

        if let Some(score) = terminal_score(board, last_square, self.me) {
            return Ok(SearchResult::terminal(score));
        }

        let maximizing = to_move == self.me;
        let mut best = SearchResult::worst_for(maximizing);

        for square in empty_squares(board) {
            let child = {
                let mut scratch = ScratchMark::place(board, square, to_move)?;
                self.node(
                    &mut scratch,
                    Some(square),
                    alpha,
                    beta,
                    to_move.opponent(),
                    counters,
                )?
            };

            // Strict comparison: the lowest square keeps ties.
            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves {
                best = SearchResult {
                    square: Some(square),
                    score: child.score,
                };
            }

            if !self.alpha_beta_pruning {
                continue;
            }
            if maximizing {
                alpha = alpha.max(child.score);
            } else {
                beta = beta.min(child.score);
            }
            if beta <= alpha {
                counters.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}
