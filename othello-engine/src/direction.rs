//! The eight compass directions a line of discs can run in.

use crate::bitboard::Bitboard;

/// Masks selecting everything except the far-left and far-right columns.
const NOT_A_FILE: u64 = 0x7f7f7f7f7f7f7f7f;
const NOT_H_FILE: u64 = 0xfefefefefefefefe;

/// One of the 8 unit steps on the board. North is towards row 1, east towards column H.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    /// Every direction, clockwise from the north-west.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// The `(dx, dy)` unit vector for this direction.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Move every location in `bitboard` one step in this direction.
    /// Locations that would leave the board are dropped.
    #[inline]
    pub fn shift(self, bitboard: Bitboard) -> Bitboard {
        let bits: u64 = bitboard.into();
        let shifted = match self {
            Direction::NorthWest => (bits << 9) & NOT_H_FILE,
            Direction::North => bits << 8,
            Direction::NorthEast => (bits << 7) & NOT_A_FILE,
            Direction::East => (bits >> 1) & NOT_A_FILE,
            Direction::SouthEast => (bits >> 9) & NOT_A_FILE,
            Direction::South => bits >> 8,
            Direction::SouthWest => (bits >> 7) & NOT_H_FILE,
            Direction::West => (bits << 1) & NOT_H_FILE,
        };
        Bitboard::from(shifted)
    }
}
