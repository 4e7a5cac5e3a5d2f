//! The board engine: move validation, turn alternation, and win/draw detection.

use super::action::PlayError;
#[cfg(debug_assertions)]
use super::invariants::{EngineInvariants, InvariantSet};
use super::observer::BoardObserver;
use super::rng::RandomSource;
use super::rules;
use super::{Board, GameState, Player, Position, Square};
use tracing::{debug, instrument};

/// A single game of tic-tac-toe.
///
/// Starts empty with X to move. The board only changes through [`play`],
/// [`play_index`] and [`play_random`]. A finished game stays finished;
/// start a new one by constructing a new engine.
///
/// The engine does no locking. Drive it from one thread at a time.
///
/// [`play`]: BoardEngine::play
/// [`play_index`]: BoardEngine::play_index
/// [`play_random`]: BoardEngine::play_random
pub struct BoardEngine {
    pub(super) board: Board,
    pub(super) state: GameState,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl BoardEngine {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::InProgress(Player::X),
            observers: Vec::new(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        self.state.active_player()
    }

    /// Empty positions, in index order.
    pub fn available_positions(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// True while at least one square is empty.
    pub fn has_moves(&self) -> bool {
        self.board.squares().contains(&Square::Empty)
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Registers an observer.
    ///
    /// If the game is in progress the observer is told whose turn it is
    /// straight away.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, mut observer: Box<dyn BoardObserver>) {
        if let Some(player) = self.current_player() {
            observer.turn_changed(player);
        }
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer registered");
    }

    /// Plays the active player's mark at `position`.
    ///
    /// Returns the state after the move.
    ///
    /// # Errors
    ///
    /// - [`PlayError::NoActiveGame`] if the game is already won or drawn.
    /// - [`PlayError::CellOccupied`] if the square is taken.
    ///
    /// Neither error changes the board or notifies observers.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn play(&mut self, position: Position) -> Result<GameState, PlayError> {
        let player = self.current_player().ok_or(PlayError::NoActiveGame)?;

        if !self.board.is_empty(position) {
            return Err(PlayError::CellOccupied(position));
        }

        Ok(self.apply(position, player))
    }

    /// Plays at a raw board index (0-8).
    ///
    /// # Errors
    ///
    /// Same as [`play`](BoardEngine::play).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a board cell. Use [`Position::from_index`]
    /// to validate untrusted input first.
    pub fn play_index(&mut self, index: usize) -> Result<GameState, PlayError> {
        let Some(position) = Position::from_index(index) else {
            panic!("There is no board cell at index {index}");
        };
        self.play(position)
    }

    /// Plays the active player's mark on a uniformly chosen empty square.
    ///
    /// Returns the position played, or `None` without touching anything if
    /// the game is already over. Only empty squares are candidates, so this
    /// can never hit an occupied cell.
    ///
    /// # Panics
    ///
    /// Panics if `rng` returns an index outside the range it was asked for.
    #[instrument(skip_all, fields(state = %self.state))]
    pub fn play_random<R>(&mut self, rng: &mut R) -> Option<Position>
    where
        R: RandomSource + ?Sized,
    {
        let player = self.current_player()?;
        let available = self.available_positions();
        if available.is_empty() {
            return None;
        }

        let index = rng.pick_index(available.len());
        assert!(
            index < available.len(),
            "random source returned {index} for {} choices",
            available.len()
        );
        let position = available[index];
        debug!(%player, %position, "Playing at random");

        self.apply(position, player);
        Some(position)
    }

    /// Places the mark, settles the new state, and notifies observers.
    ///
    /// Caller guarantees the game is in progress and the square is empty.
    fn apply(&mut self, position: Position, player: Player) -> GameState {
        #[cfg(debug_assertions)]
        let before = self.board.clone();

        self.board.set(position, Square::Occupied(player));

        if rules::has_won(&self.board, player) {
            self.state = GameState::Won(player);
            debug!(%player, %position, "Winning move");
            self.notify_game_ended();
        } else if !self.has_moves() {
            self.state = GameState::Draw;
            debug!(%player, %position, "Board full, draw");
            self.notify_game_ended();
        } else {
            let next = player.opponent();
            self.state = GameState::InProgress(next);
            debug!(%player, %position, next = %next, "Move accepted");
            for observer in &mut self.observers {
                observer.turn_changed(next);
            }
            for observer in &mut self.observers {
                observer.move_played(player, position);
            }
        }

        #[cfg(debug_assertions)]
        self.assert_invariants(&before);

        self.state
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self, before: &Board) {
        debug_assert!(
            before
                .squares()
                .iter()
                .zip(self.board.squares())
                .all(|(old, new)| *old == Square::Empty || old == new),
            "An occupied square was overwritten"
        );
        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Invariant violation: {descriptions}");
        }
    }

    fn notify_game_ended(&mut self) {
        let state = self.state;
        for observer in &mut self.observers {
            observer.game_ended(state);
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardEngine")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl std::fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.board, self.state)
    }
}
