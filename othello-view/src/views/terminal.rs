//! A [`View`] that draws the board as text and reads moves typed by the user.

use super::View;
use othello_engine::{BoardEngine, CellState, Location, COLUMN_LABELS, EDGE_LENGTH, ROW_LABELS};
use std::io::{self, Write};

/// The characters drawn for each kind of cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Markers {
    pub black: char,
    pub white: char,
    pub empty: char,
    /// Drawn on empty cells where the player to move may play.
    pub legal: Option<char>,
}

impl Markers {
    /// Plain ASCII markers, without move hints.
    pub const ASCII: Markers = Markers {
        black: '#',
        white: 'O',
        empty: '.',
        legal: None,
    };

    /// Unicode discs, with move hints.
    pub const UNICODE: Markers = Markers {
        black: '●',
        white: '○',
        empty: '·',
        legal: Some('*'),
    };

    fn for_cell(&self, cell: CellState) -> char {
        match cell {
            CellState::Black => self.black,
            CellState::White => self.white,
            CellState::Empty => self.empty,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Draws to any [`Write`]r and resolves moves typed as "D3" or "4 3".
pub struct TerminalView<W: Write> {
    out: W,
    markers: Markers,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, markers: Markers) -> Self {
        Self { out, markers }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Parse numeric coordinates: two integers separated by spaces or a comma.
fn parse_coords(input: &str) -> Option<(i32, i32)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    match parts.next() {
        None => Some((x, y)),
        Some(_) => None,
    }
}

impl<W: Write> View for TerminalView<W> {
    type Input = str;
    type Error = io::Error;

    fn resolve(&self, input: &str) -> Option<Location> {
        let input = input.trim();
        if let Ok(loc) = input.parse() {
            return Some(loc);
        }
        let (x, y) = parse_coords(input)?;
        Location::new(x, y)
    }

    fn state_changed(&mut self, engine: &BoardEngine) -> io::Result<()> {
        let legal = engine.legal_moves();
        let edge = EDGE_LENGTH as i32;

        writeln!(self.out)?;
        write!(self.out, "  ")?;
        for label in COLUMN_LABELS.chars() {
            write!(self.out, " {}", label)?;
        }
        writeln!(self.out)?;

        for (y, label) in (1..=edge).zip(ROW_LABELS.chars()) {
            write!(self.out, " {} ", label)?;
            for x in 1..=edge {
                let cell = engine.get_cell(x, y);
                let marker = match (cell, self.markers.legal) {
                    (CellState::Empty, Some(hint))
                        if Location::new(x, y).map_or(false, |loc| legal.contains(loc)) =>
                    {
                        hint
                    }
                    _ => self.markers.for_cell(cell),
                };
                write!(self.out, "{} ", marker)?;
            }
            writeln!(self.out)?;
        }

        let turn = engine.current_turn();
        writeln!(
            self.out,
            "{} {} to move. Legal moves: {}",
            self.markers.for_cell(turn.cell()),
            turn,
            legal
        )?;
        self.out.flush()
    }
}
