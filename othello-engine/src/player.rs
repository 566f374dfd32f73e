//! Players and the contents of a single board cell.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game. Also serves as whose turn it is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state holding one of this player's discs.
    #[inline]
    pub const fn cell(self) -> CellState {
        match self {
            Player::Black => CellState::Black,
            Player::White => CellState::White,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a player from its name or its initial, case-insensitive.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The contents of one cell on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellState {
    Empty,
    Black,
    White,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

impl CellState {
    /// The player owning the disc in this cell, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Player::Black),
            CellState::White => Some(Player::White),
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.cell()
    }
}
