//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("Cross")]
    X,
    /// Player O (goes second).
    #[display("Nought")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the single-character sign drawn on the board.
    pub fn sign(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the sign drawn for this square (a blank when empty).
    pub fn sign(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.sign(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    ///
    /// Only the engine writes to the board; it never overwrites an occupied square.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions currently holding `player`'s mark.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.get(*pos) == Square::Occupied(player))
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.positions_of(player).count()
    }
}

const RULE: &str = "-------------";

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{RULE}")?;
        for row in self.squares.chunks(3) {
            write!(f, "\n|")?;
            for square in row {
                write!(f, " {} |", square.sign())?;
            }
            write!(f, "\n{RULE}")?;
        }
        Ok(())
    }
}

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Game is ongoing; the payload is the player to move.
    #[display("Playing as {_0}")]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Won by {_0}")]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameState {
    /// Returns the player to move, if the game is in progress.
    pub fn active_player(&self) -> Option<Player> {
        match self {
            GameState::InProgress(player) => Some(*player),
            GameState::Won(_) | GameState::Draw => None,
        }
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won(player) => Some(*player),
            GameState::InProgress(_) | GameState::Draw => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::InProgress(_))
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::InProgress(Player::X)
    }
}
