//! Low-level bitboard operations.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! the MSB is the upper-left of the board (A1), and uses row-major order.

use crate::direction::Direction;
use crate::{utils, NUM_SPACES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: E4 and D5.
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

/// A bitboard with no locations set.
pub const EMPTY: Bitboard = Bitboard(0);

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(
            self.into_iter().map(|bit| match bit {
                false => '.',
                true => '#',
            }),
            f,
        )
    }
}

impl Bitboard {
    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if any location is set in both bitboards.
    #[inline]
    pub fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }
}

/// Compute a mask of the legal moves for the active player from
/// masks of the active player's pieces and the opponent's pieces.
///
/// Smears the active player's pieces through runs of opponent pieces in every
/// direction at once; a move is any empty square one step past such a run.
/// The edge masks in [`Direction::shift`] stop runs from wrapping across rows.
pub fn get_move_mask(active: Bitboard, opponent: Bitboard) -> Bitboard {
    let empties = !(active | opponent);
    let mut moves = EMPTY;

    for &dir in Direction::ALL.iter() {
        // A run can hold at most six opponent pieces between two of ours.
        let mut run = dir.shift(active) & opponent;
        for _ in 0..5 {
            run |= dir.shift(run) & opponent;
        }
        moves |= dir.shift(run) & empties;
    }

    moves
}

/// Iterator for the bits in a [`Bitboard`].
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bitmask = Bitboard::from(1u64 << (self.remaining - 1));
        let bit = self.bitboard.intersects(bitmask);
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SPACES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_positions_are_disjoint() {
        assert!(!BLACK_START.intersects(WHITE_START));
        assert_eq!(BLACK_START.count_occupied(), 2);
        assert_eq!(WHITE_START.count_occupied(), 2);
        assert_eq!((BLACK_START | WHITE_START).count_occupied(), 4);
    }

    #[test]
    fn bits_iterate_from_msb() {
        let bits: Vec<bool> = Bitboard::from(1u64 << 63).into_iter().collect();
        assert_eq!(bits.len(), 64);
        assert!(bits[0]);
        assert!(bits[1..].iter().all(|&bit| !bit));
    }

    #[test]
    fn opening_move_mask() {
        // D3, C4, F5, E6.
        let expected = Bitboard::from(0x0000102004080000u64);
        assert_eq!(get_move_mask(BLACK_START, WHITE_START), expected);
    }

    #[test]
    fn move_mask_does_not_wrap() {
        // Black on H1, White on A2: shifting east off H1 must not land on A2.
        let black = Bitboard::from(1u64 << 56);
        let white = Bitboard::from(1u64 << 55);
        assert!(get_move_mask(black, white).is_empty());
    }

    #[test]
    fn display_grid() {
        let grid = BLACK_START.to_string();
        assert!(grid.starts_with("   A B C D E F G H"));
        assert!(grid.contains(" 4 . . . . # . . . "));
        assert!(grid.contains(" 5 . . . # . . . . "));
    }
}
