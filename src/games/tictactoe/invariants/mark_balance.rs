//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{BoardEngine, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// X moves first and turns alternate, so no other count is reachable.
pub struct MarkBalanceInvariant;

impl Invariant<BoardEngine> for MarkBalanceInvariant {
    fn holds(engine: &BoardEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
