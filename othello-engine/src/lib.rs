//! `othello-engine` implements the rules of Othello for engines and UIs.
//!
//! The crate is layered:
//!
//!  - [`bitboard`] holds the raw bit operations on 64-square masks.
//!  - [`Board`] stores the discs and scans the eight [`Direction`]s from a
//!    placement to find which opponent discs it brackets.
//!  - [`BoardEngine`] is the game itself: it owns a board and the player to
//!    move, validates moves and applies them atomically.
//!
//! The engine is also exposed to C through [`ffi`].

pub mod bitboard;
pub mod ffi;
pub mod test_utils;

mod board;
mod direction;
mod engine;
mod location;
mod player;
mod utils;

pub use board::*;
pub use direction::*;
pub use engine::*;
pub use location::*;
pub use player::*;
pub use utils::{COLUMN_LABELS, ROW_LABELS};

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
