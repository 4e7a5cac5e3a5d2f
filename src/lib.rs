//! Tactoe Engine - a presentation-free tic-tac-toe game engine
//!
//! The engine owns the board, alternates turns, validates moves, and
//! detects wins and draws. Presenters watch it through [`BoardObserver`]
//! and drive it with [`BoardEngine::play`] or [`BoardEngine::play_random`].
//!
//! # Architecture
//!
//! - **Engine**: [`BoardEngine`], the only mutable game state
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **Observers**: synchronous notifications on turn change, move, and game end
//! - **Randomness**: any [`RandomSource`], seeded [`GameRng`] by default
//!
//! # Example
//!
//! ```
//! use tactoe_engine::{BoardEngine, GameState, Player, Position};
//!
//! let mut engine = BoardEngine::new();
//! for index in [0, 1, 3, 2] {
//!     engine.play_index(index)?;
//! }
//! assert_eq!(engine.play(Position::BottomLeft)?, GameState::Won(Player::X));
//! # Ok::<(), tactoe_engine::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod simulation;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Batch play
pub use simulation::{Tally, play_random_game, simulate};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardEngine, BoardEvent, BoardObserver, EventLog, GameRng, GameState, Move, PlayError,
    Player, Position, RandomSource, Square, invariants, rules,
};
