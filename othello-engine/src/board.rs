//! Board contents and the directional scan that finds flippable discs.
//!
//! A [`Board`] is a pair of color bitboards. Scanning off the edge of the board
//! yields an empty bitboard, which never matches either color, so a scan can
//! never read outside the grid.

use crate::bitboard::{self, Bitboard, BLACK_START, EMPTY, WHITE_START};
use crate::direction::Direction;
use crate::location::{Location, LocationList};
use crate::player::{CellState, Player};
use crate::{utils, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The discs on an Othello board, one bitboard per color.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the standard opening position.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening: White on D4 and E5, Black on E4 and D5.
    pub const fn new() -> Self {
        Self {
            black: BLACK_START,
            white: WHITE_START,
        }
    }

    /// A board with no discs on it.
    pub const fn empty() -> Self {
        Self {
            black: EMPTY,
            white: EMPTY,
        }
    }

    /// Build a board from one bitboard per color.
    /// Returns None if the two colors share a cell.
    pub fn from_pieces(black: Bitboard, white: Bitboard) -> Option<Self> {
        if black.intersects(white) {
            None
        } else {
            Some(Self { black, white })
        }
    }

    /// All of one player's discs.
    #[inline]
    pub fn pieces(&self, player: Player) -> Bitboard {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    /// Read the state of one cell.
    pub fn get(&self, loc: Location) -> CellState {
        let mask = Bitboard::from(loc);
        if self.black.intersects(mask) {
            CellState::Black
        } else if self.white.intersects(mask) {
            CellState::White
        } else {
            CellState::Empty
        }
    }

    /// Overwrite the state of one cell.
    pub fn set(&mut self, loc: Location, state: CellState) {
        let mask = Bitboard::from(loc);
        self.black &= !mask;
        self.white &= !mask;
        match state {
            CellState::Black => self.black |= mask,
            CellState::White => self.white |= mask,
            CellState::Empty => {}
        }
    }

    /// The opponent discs `player` would flip in `dir` by placing at `origin`.
    ///
    /// Walks from `origin` while cells hold the opponent's color. The run counts
    /// only if the walk stops on one of `player`'s discs; stopping on an empty
    /// cell or walking off the board yields an empty bitboard.
    pub fn bracket(&self, origin: Location, player: Player, dir: Direction) -> Bitboard {
        let active = self.pieces(player);
        let opponent = self.pieces(!player);

        let mut run = EMPTY;
        let mut cursor = dir.shift(origin.into());
        while cursor.intersects(opponent) {
            run |= cursor;
            cursor = dir.shift(cursor);
        }

        if cursor.intersects(active) {
            run
        } else {
            EMPTY
        }
    }

    /// Whether any direction from `origin` brackets opponent discs for `player`.
    /// Stops at the first bracket found.
    pub fn brackets_any(&self, origin: Location, player: Player) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| !self.bracket(origin, player, dir).is_empty())
    }

    /// Every opponent disc `player` would flip by placing at `origin`, across all directions.
    pub fn flips(&self, origin: Location, player: Player) -> Bitboard {
        Direction::ALL
            .iter()
            .fold(EMPTY, |acc, &dir| acc | self.bracket(origin, player, dir))
    }

    /// Put a `player` disc at `origin` and turn over `flipped`, which must
    /// hold only opponent discs.
    pub(crate) fn place(&mut self, origin: Location, player: Player, flipped: Bitboard) {
        let placed = flipped | Bitboard::from(origin);
        match player {
            Player::Black => {
                self.black |= placed;
                self.white ^= flipped;
            }
            Player::White => {
                self.white |= placed;
                self.black ^= flipped;
            }
        }
    }

    /// All the locations where `player` has a legal move.
    pub fn move_mask(&self, player: Player) -> LocationList {
        bitboard::get_move_mask(self.pieces(player), self.pieces(!player)).into()
    }

    /// Count the discs of one color.
    pub fn count(&self, player: Player) -> u8 {
        self.pieces(player).count_occupied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let markers = self
            .black
            .into_iter()
            .zip(self.white.into_iter())
            .map(|cell| match cell {
                (false, false) => '.',
                (true, false) => '#',
                (false, true) => 'O',
                (true, true) => '!',
            });
        utils::format_grid(markers, f)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected {} cells, found {}", NUM_SPACES, found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell marker {:?}", marker)]
    UnknownMarker { marker: char },
}

/// Parse a board from 64 cell markers in row-major order from A1, ignoring whitespace.
/// `#`, `X` or `B` is a black disc, `O` or `W` a white disc, and `.` or `-` an empty cell.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let markers: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if markers.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: markers.len(),
            });
        }

        let mut board = Board::empty();
        for (offset, &marker) in markers.iter().enumerate() {
            let state = match marker.to_ascii_uppercase() {
                '#' | 'X' | 'B' => CellState::Black,
                'O' | 'W' => CellState::White,
                '.' | '-' => CellState::Empty,
                _ => return Err(ParseBoardError::UnknownMarker { marker }),
            };
            board.set(Location::from_index(63 - offset as u8), state);
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(notation: &str) -> Location {
        notation.parse().unwrap()
    }

    #[test]
    fn opening_cells() {
        let board = Board::new();
        assert_eq!(board.get(loc("D4")), CellState::White);
        assert_eq!(board.get(loc("E5")), CellState::White);
        assert_eq!(board.get(loc("E4")), CellState::Black);
        assert_eq!(board.get(loc("D5")), CellState::Black);
        assert_eq!(board.count(Player::Black) + board.count(Player::White), 4);
    }

    #[test]
    fn from_pieces_rejects_overlap() {
        assert_eq!(Board::from_pieces(BLACK_START, WHITE_START), Some(Board::new()));
        assert_eq!(Board::from_pieces(BLACK_START, BLACK_START), None);
    }

    #[test]
    fn set_overwrites() {
        let mut board = Board::new();
        board.set(loc("D4"), CellState::Black);
        assert_eq!(board.get(loc("D4")), CellState::Black);
        assert_eq!(board.count(Player::White), 1);

        board.set(loc("D4"), CellState::Empty);
        assert_eq!(board.get(loc("D4")), CellState::Empty);
        assert_eq!(board.count(Player::Black), 2);
    }

    #[test]
    fn bracket_in_single_direction() {
        let board = Board::new();
        // Black at C4 runs east over D4 to E4.
        let flipped = board.bracket(loc("C4"), Player::Black, Direction::East);
        assert_eq!(flipped, Bitboard::from(loc("D4")));
        assert!(board.bracket(loc("C4"), Player::Black, Direction::West).is_empty());
        assert!(board
            .bracket(loc("C4"), Player::Black, Direction::SouthEast)
            .is_empty());
    }

    #[test]
    fn bracket_needs_closing_disc() {
        let board: Board = "
            . . . . . . . .
            . O O O . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // Run of white ends on an empty cell.
        assert!(board.bracket(loc("A2"), Player::Black, Direction::East).is_empty());
        assert!(!board.brackets_any(loc("A2"), Player::Black));
    }

    #[test]
    fn bracket_stops_at_edge() {
        let board: Board = "
            . . . . . O O O
            # . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // White runs to the H file; the walk must not wrap onto the next row.
        assert!(board.bracket(loc("E1"), Player::Black, Direction::East).is_empty());
        assert!(board.flips(loc("E1"), Player::Black).is_empty());
    }

    #[test]
    fn adjacent_own_disc_brackets_nothing() {
        let board: Board = "
            # # O # . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        assert!(board.bracket(loc("A1"), Player::Black, Direction::East).is_empty());
        assert!(board.bracket(loc("E1"), Player::Black, Direction::West).is_empty());
        assert_eq!(
            board.bracket(loc("B1"), Player::Black, Direction::East),
            Bitboard::from(loc("C1"))
        );
    }

    #[test]
    fn flips_collects_every_direction() {
        let board: Board = "
            # . . # . . . .
            . O . O . . . .
            . . O O . . . .
            # O O . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        let flips = board.flips(loc("D4"), Player::Black);
        let expected = ["B2", "C3", "D2", "D3", "B4", "C4"]
            .iter()
            .fold(EMPTY, |acc, s| acc | Bitboard::from(loc(s)));
        assert_eq!(flips, expected);
    }

    #[test]
    fn place_turns_over_flips() {
        let mut board = Board::new();
        let flipped = board.flips(loc("D3"), Player::Black);
        board.place(loc("D3"), Player::Black, flipped);
        assert_eq!(board.get(loc("D3")), CellState::Black);
        assert_eq!(board.get(loc("D4")), CellState::Black);
        assert_eq!(board.count(Player::Black), 4);
        assert_eq!(board.count(Player::White), 1);
    }

    #[test]
    fn opening_move_mask() {
        let moves: Vec<String> = Board::new()
            .move_mask(Player::Black)
            .map(|mv| mv.to_string())
            .collect();
        assert_eq!(moves, vec!["E6", "F5", "C4", "D3"]);
    }

    #[test]
    fn parse_and_display() {
        let board = Board::new();
        let text = board.to_string();
        assert!(text.contains(" 4 . . . O # . . . "));
        assert!(text.contains(" 5 . . . # O . . . "));

        let rows: String = text.lines().skip(1).map(|line| &line[3..]).collect();
        assert_eq!(rows.parse::<Board>(), Ok(board));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "...".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 3 })
        );
        let mut bad = ".".repeat(63);
        bad.push('?');
        assert_eq!(
            bad.parse::<Board>(),
            Err(ParseBoardError::UnknownMarker { marker: '?' })
        );
    }
}
