//! Player trait and implementations.

mod expert;
mod human;
mod random;

pub use expert::ExpertPlayer;
pub use human::HumanPlayer;
pub use random::RandomPlayer;

use crate::console::Console;
use anyhow::Result;
use minimax_tictactoe::{Board, Mark};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::instrument;

/// Trait for participants that can choose moves.
pub trait Player {
    /// The mark this participant plays.
    fn mark(&self) -> Mark;

    /// Returns the participant's display name.
    fn name(&self) -> &str;

    /// True for participants that move without human input.
    fn is_computer(&self) -> bool;

    /// Picks an empty square (0-8) on `board` for this participant's mark.
    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize>;
}

/// Kind of participant, as named on the command line or in a config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerKind {
    /// Moves typed at the console.
    #[serde(alias = "h")]
    #[strum(to_string = "human", serialize = "h")]
    Human,
    /// Uniformly random empty squares.
    #[serde(alias = "c", alias = "computer")]
    #[strum(to_string = "random", serialize = "computer", serialize = "c")]
    Random,
    /// Perfect play by minimax search.
    #[serde(alias = "s", alias = "smart")]
    #[strum(to_string = "expert", serialize = "smart", serialize = "s")]
    Expert,
}

impl PlayerKind {
    /// Interprets an interactive answer. Anything unrecognised means expert.
    #[instrument]
    pub fn from_answer(answer: &str) -> Self {
        answer.trim().parse().unwrap_or(PlayerKind::Expert)
    }
}

/// One of the fixed set of participants.
#[derive(Debug)]
pub enum Participant {
    /// Human at the console.
    Human(HumanPlayer),
    /// Random mover.
    Random(RandomPlayer),
    /// Minimax search.
    Expert(ExpertPlayer),
}

impl Participant {
    /// Builds a participant of `kind` playing `mark`.
    ///
    /// `rng` is only used by random players, which take ownership of a
    /// generator split off from it.
    #[instrument(skip(rng))]
    pub fn new(kind: PlayerKind, mark: Mark, rng: &mut StdRng) -> Self {
        match kind {
            PlayerKind::Human => Participant::Human(HumanPlayer::new(mark)),
            PlayerKind::Random => Participant::Random(RandomPlayer::from_parent(mark, rng)),
            PlayerKind::Expert => Participant::Expert(ExpertPlayer::new(mark)),
        }
    }
}

impl Player for Participant {
    fn mark(&self) -> Mark {
        match self {
            Participant::Human(p) => p.mark(),
            Participant::Random(p) => p.mark(),
            Participant::Expert(p) => p.mark(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Participant::Human(p) => p.name(),
            Participant::Random(p) => p.name(),
            Participant::Expert(p) => p.name(),
        }
    }

    fn is_computer(&self) -> bool {
        match self {
            Participant::Human(p) => p.is_computer(),
            Participant::Random(p) => p.is_computer(),
            Participant::Expert(p) => p.is_computer(),
        }
    }

    fn choose_move<R: BufRead, W: Write>(
        &mut self,
        board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<usize> {
        match self {
            Participant::Human(p) => p.choose_move(board, console),
            Participant::Random(p) => p.choose_move(board, console),
            Participant::Expert(p) => p.choose_move(board, console),
        }
    }
}
