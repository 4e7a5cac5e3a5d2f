//! Observer interface for board notifications.
//!
//! Observers are invoked synchronously, in registration order, before the
//! operation that triggered them returns.

use super::action::Move;
use super::{GameState, Player, Position};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Receives notifications from a [`BoardEngine`](super::BoardEngine).
///
/// Every method has an empty default so observers implement only what they use.
pub trait BoardObserver {
    /// The active player changed and the game goes on.
    fn turn_changed(&mut self, _player: Player) {}

    /// A non-terminal move was accepted.
    fn move_played(&mut self, _player: Player, _position: Position) {}

    /// The game was won or drawn.
    fn game_ended(&mut self, _state: GameState) {}
}

impl<T: BoardObserver + ?Sized> BoardObserver for Rc<RefCell<T>> {
    fn turn_changed(&mut self, player: Player) {
        self.borrow_mut().turn_changed(player);
    }

    fn move_played(&mut self, player: Player, position: Position) {
        self.borrow_mut().move_played(player, position);
    }

    fn game_ended(&mut self, state: GameState) {
        self.borrow_mut().game_ended(state);
    }
}

/// A single notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum BoardEvent {
    /// See [`BoardObserver::turn_changed`].
    #[display("Turn: {_0}")]
    TurnChanged(Player),
    /// See [`BoardObserver::move_played`].
    #[display("Played: {_0}")]
    MovePlayed(Move),
    /// See [`BoardObserver::game_ended`].
    #[display("Game over: {_0}")]
    GameEnded(GameState),
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<BoardEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }
}

impl BoardObserver for EventLog {
    fn turn_changed(&mut self, player: Player) {
        self.events.push(BoardEvent::TurnChanged(player));
    }

    fn move_played(&mut self, player: Player, position: Position) {
        self.events.push(BoardEvent::MovePlayed(Move::new(player, position)));
    }

    fn game_ended(&mut self, state: GameState) {
        self.events.push(BoardEvent::GameEnded(state));
    }
}
