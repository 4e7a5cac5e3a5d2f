//! Tic-tac-toe board engine.

mod action;
mod engine;
pub mod invariants;
mod observer;
mod position;
mod rng;
pub mod rules;
mod types;

pub use action::{Move, PlayError};
pub use engine::BoardEngine;
pub use observer::{BoardEvent, BoardObserver, EventLog};
pub use position::Position;
pub use rng::{GameRng, RandomSource};
pub use types::{Board, GameState, Player, Square};
