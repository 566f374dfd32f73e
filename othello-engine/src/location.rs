//! Code for working with [`Location`]s on the Othello board.
//!
//! Locations use 1-indexed `(x, y)` coordinates: `x` is the column (A to H),
//! `y` is the row (1 to 8), so `(4, 3)` is "D3".

use crate::bitboard::Bitboard;
use crate::direction::Direction;
use crate::utils::{COLUMN_LABELS, ROW_LABELS};
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};

/// A location on the Othello board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Build a location from 1-indexed `(x, y)` coordinates.
    /// Returns None for anything off the board.
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let edge = EDGE_LENGTH as i32;
        if x < 1 || x > edge || y < 1 || y > edge {
            return None;
        }

        let offset = (y - 1) * edge + (x - 1);
        Some(Self::from_index(63 - offset as u8))
    }

    /// Convert from a bit index: 0 for H8, 63 for A1.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self(Bitboard::from(1u64 << index))
    }

    /// Convert into a bit index: 0 for H8, 63 for A1.
    #[inline]
    pub fn to_index(self) -> u8 {
        let bitboard: u64 = self.0.into();
        bitboard.trailing_zeros() as u8
    }

    /// Get the 1-indexed `(x, y)` coordinates.
    pub fn to_coords(self) -> (u8, u8) {
        let offset = 63 - self.to_index() as usize;
        let x = offset % EDGE_LENGTH + 1;
        let y = offset / EDGE_LENGTH + 1;
        (x as u8, y as u8)
    }

    /// The neighboring location one step in `dir`, if it is on the board.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (x, y) = self.to_coords();
        let (dx, dy) = dir.delta();
        Self::new(i32::from(x) + i32::from(dx), i32::from(y) + i32::from(dy))
    }
}

/// Convert this [`Location`] into string notation ("D3").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_coords();
        let col_str = COLUMN_LABELS.chars().nth(x as usize - 1).ok_or(fmt::Error)?;
        let row_str = ROW_LABELS.chars().nth(y as usize - 1).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.intersects(loc.into())
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from string notation ("D3", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let x = COLUMN_LABELS.find(col_str).ok_or(ParseLocationError)? as i32 + 1;
        let y = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as i32;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::new(x, y).ok_or(ParseLocationError)
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0.is_empty() {
            return None;
        }

        let bitboard: u64 = self.0.into();
        let next_move = Bitboard::from(1u64 << bitboard.trailing_zeros());
        self.0 ^= next_move;

        Some(Location(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
