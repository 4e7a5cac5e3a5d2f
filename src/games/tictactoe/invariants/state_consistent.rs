//! State consistency invariant: the game state agrees with the board.

use super::super::rules::{has_won, is_draw, is_full};
use super::super::{BoardEngine, GameState};
use super::Invariant;

/// Invariant: the state variant is the one the board implies.
///
/// - In progress: nobody owns a line and a square is free.
/// - Won: the winner owns a line and the loser does not.
/// - Draw: the board is full with no line owned.
pub struct StateConsistentInvariant;

impl Invariant<BoardEngine> for StateConsistentInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let board = engine.board();
        match engine.state() {
            GameState::InProgress(player) => {
                !is_full(board)
                    && !has_won(board, player)
                    && !has_won(board, player.opponent())
            }
            GameState::Won(winner) => {
                has_won(board, winner) && !has_won(board, winner.opponent())
            }
            GameState::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game state agrees with the board"
    }
}
