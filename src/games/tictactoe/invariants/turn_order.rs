//! Turn order invariant: the active player follows from the marks on the board.

use super::super::{BoardEngine, GameState, Player};
use super::Invariant;

/// Invariant: while in progress, X is to move exactly when the counts are equal.
///
/// This is what strict X, O, X, ... alternation leaves behind on the board.
pub struct TurnOrderInvariant;

impl Invariant<BoardEngine> for TurnOrderInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        match engine.state() {
            GameState::InProgress(active) => {
                let balanced =
                    engine.board().count(Player::X) == engine.board().count(Player::O);
                (active == Player::X) == balanced
            }
            GameState::Won(_) | GameState::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Active player matches alternation from X"
    }
}
