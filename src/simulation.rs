//! Random-vs-random batch play.

use crate::games::tictactoe::{BoardEngine, GameState, Player, RandomSource};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Records one finished game. In-progress states are ignored.
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Won(Player::X) => self.x_wins += 1,
            GameState::Won(Player::O) => self.o_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::InProgress(_) => {}
        }
    }

    /// Total games recorded.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws",
            self.total(),
            self.x_wins,
            self.o_wins,
            self.draws
        )
    }
}

/// Plays one game to completion using only random moves.
#[instrument(skip_all)]
pub fn play_random_game<R>(rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    let mut engine = BoardEngine::new();
    while engine.play_random(rng).is_some() {}
    debug!(state = %engine.state(), "Random game finished");
    engine.state()
}

/// Plays `games` random games and counts the outcomes.
#[instrument(skip(rng))]
pub fn simulate<R>(games: u32, rng: &mut R) -> Tally
where
    R: RandomSource + ?Sized,
{
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(play_random_game(rng));
    }
    info!(%tally, "Simulation complete");
    tally
}
