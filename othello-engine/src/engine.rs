//! The turn-based Othello state machine.
//!
//! [`BoardEngine`] owns a [`Board`] and whose turn it is. The only way to
//! change either is a successful move, which places a disc, flips every
//! bracketed line and hands the turn to the opponent in one step.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::location::{Location, LocationList};
use crate::player::{CellState, Player};
use derive_more::{Display, Error};
use log::{debug, trace};

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum MoveError {
    #[display(fmt = "({}, {}) is off the board", x, y)]
    OutOfBounds { x: i32, y: i32 },
    #[display(fmt = "{} is already occupied", location)]
    Occupied { location: Location },
    #[display(fmt = "{} does not bracket any opponent discs", location)]
    NoBracket { location: Location },
}

/// An Othello game in progress: the board and the player to move.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BoardEngine {
    board: Board,
    turn: Player,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine {
    /// Start from the standard opening with Black to move.
    pub const fn new() -> Self {
        Self::with_position(Board::new(), Player::Black)
    }

    /// Start from an arbitrary position.
    pub const fn with_position(board: Board, turn: Player) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move it is.
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> CellState {
        self.board.get(loc)
    }

    /// Read a cell by 1-indexed coordinates. Anything off the board reads as empty.
    pub fn get_cell(&self, x: i32, y: i32) -> CellState {
        Location::new(x, y).map_or(CellState::Empty, |loc| self.cell(loc))
    }

    /// Whether the player to move may place a disc at `(x, y)`.
    /// Accepts any integers; off-board coordinates are simply illegal.
    pub fn is_legal_move(&self, x: i32, y: i32) -> bool {
        match Location::new(x, y) {
            Some(loc) => self.is_legal(loc),
            None => false,
        }
    }

    /// Whether the player to move may place a disc at `loc`.
    pub fn is_legal(&self, loc: Location) -> bool {
        self.cell(loc) == CellState::Empty && self.board.brackets_any(loc, self.turn)
    }

    /// Every location the player to move may play.
    pub fn legal_moves(&self) -> LocationList {
        self.board.move_mask(self.turn)
    }

    /// Play at `loc` for the player to move, returning the discs that were flipped.
    /// On error nothing changes.
    pub fn play(&mut self, loc: Location) -> Result<Bitboard, MoveError> {
        if self.cell(loc) != CellState::Empty {
            return Err(MoveError::Occupied { location: loc });
        }

        let flipped = self.board.flips(loc, self.turn);
        if flipped.is_empty() {
            return Err(MoveError::NoBracket { location: loc });
        }

        self.board.place(loc, self.turn, flipped);
        debug!(
            "{} played {}, flipping {} discs",
            self.turn,
            loc,
            flipped.count_occupied()
        );

        self.turn = !self.turn;
        Ok(flipped)
    }

    /// Play at 1-indexed `(x, y)` for the player to move.
    pub fn try_move(&mut self, x: i32, y: i32) -> Result<Bitboard, MoveError> {
        let loc = Location::new(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        self.play(loc)
    }

    /// Play at `(x, y)` if legal. Returns false, leaving the game untouched, otherwise.
    pub fn apply_move(&mut self, x: i32, y: i32) -> bool {
        match self.try_move(x, y) {
            Ok(_) => true,
            Err(err) => {
                trace!("{} rejected: {}", self.turn, err);
                false
            }
        }
    }

    /// Entry point for views: check and apply a move in one call.
    #[inline]
    pub fn attempt_move(&mut self, x: i32, y: i32) -> bool {
        self.apply_move(x, y)
    }
}
