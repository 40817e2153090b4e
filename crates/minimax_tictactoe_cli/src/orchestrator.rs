//! Game orchestration between players.

use crate::config::MatchConfig;
use crate::console::Console;
use crate::players::{Participant, Player, PlayerKind};
use anyhow::{Context, Result, bail};
use minimax_tictactoe::{Game, GameStatus, Mark, rules::empty_squares};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Board with each square showing its index, for the opening of a game.
pub fn square_guide() -> String {
    (0..3)
        .map(|row| format!(" {} | {} | {}", row * 3, row * 3 + 1, row * 3 + 2))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Runs one game between two participants.
#[derive(Debug)]
pub struct Orchestrator {
    game: Game,
    player_x: Participant,
    player_o: Participant,
    pacing: Duration,
}

impl Orchestrator {
    /// Creates an orchestrator for a fresh game.
    pub fn new(player_x: Participant, player_o: Participant, pacing: Duration) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            pacing,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays the game to the end and returns how it finished.
    #[instrument(skip_all, fields(x = self.player_x.name(), o = self.player_o.name()))]
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<GameStatus> {
        info!("Starting game");
        console.say("\nThere are the square positions!")?;
        console.say(square_guide())?;
        console.say("\n")?;
        console.say(self.game.board())?;
        console.say("")?;

        loop {
            let squares = empty_squares(self.game.board())
                .iter()
                .map(|sq| sq.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            console.say(format!("List of Empty Squares: {squares}"))?;

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            if player.is_computer() {
                console.say(format!("{mark}'s Move Now!"))?;
                std::thread::sleep(self.pacing);
            }

            debug!(%mark, player = player.name(), "Waiting for move");
            let square = player.choose_move(self.game.board(), console)?;
            let status = self
                .game
                .make_move(square)
                .with_context(|| format!("{} chose an illegal square {}", player.name(), square))?;

            console.say(self.game.board())?;
            console.say("")?;

            match status {
                GameStatus::InProgress => {}
                GameStatus::Won(winner) => {
                    info!(%winner, "Game won");
                    console.say(format!("Player {winner} WON!"))?;
                    return Ok(status);
                }
                GameStatus::Draw => {
                    info!("Game drawn");
                    console.say("Tie Game!!")?;
                    return Ok(status);
                }
            }
        }
    }
}

/// Asks which kind of participant plays `mark`.
fn ask_kind<R: BufRead, W: Write>(console: &mut Console<R, W>, mark: Mark) -> Result<PlayerKind> {
    let question = format!("Is Player {mark} Human (H), Computer (C), SmartComputer (S)? ");
    match console.prompt(&question)? {
        Some(answer) => Ok(PlayerKind::from_answer(&answer)),
        None => bail!("Input closed while choosing player {mark}"),
    }
}

/// Plays games until the user quits, or once when `once` is set.
///
/// Participants missing from `config` are asked for before every game.
/// Returns the status of each game played.
#[instrument(skip(console))]
pub fn run_session<R: BufRead, W: Write>(
    config: &MatchConfig,
    once: bool,
    console: &mut Console<R, W>,
) -> Result<Vec<GameStatus>> {
    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut results = Vec::new();

    loop {
        let kind_x = match config.player_x() {
            Some(kind) => *kind,
            None => ask_kind(console, Mark::X)?,
        };
        let kind_o = match config.player_o() {
            Some(kind) => *kind,
            None => ask_kind(console, Mark::O)?,
        };

        let mut orchestrator = Orchestrator::new(
            Participant::new(kind_x, Mark::X, &mut rng),
            Participant::new(kind_o, Mark::O, &mut rng),
            config.pacing(),
        );
        results.push(orchestrator.run(console)?);

        if once {
            break;
        }
        match console.prompt("Press (Y) to play again or (Q) to quit! ")? {
            Some(answer) if !answer.starts_with(['q', 'Q']) => continue,
            _ => break,
        }
    }

    info!(games = results.len(), "Session over");
    Ok(results)
}
