//! A [`View`] for pointer-driven frontends such as a canvas or a window.
//!
//! Clicks are resolved through a [`CellGeometry`]. Each redraw rebuilds a
//! display list of discs that the frontend paints as-is.

use super::View;
use crate::geometry::CellGeometry;
use othello_engine::{BoardEngine, Location, Player, NUM_SPACES};
use std::convert::Infallible;

/// One disc to paint, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub location: Location,
    /// Top-left corner of the disc's cell.
    pub origin: (f64, f64),
    pub size: f64,
    pub player: Player,
}

/// Resolves clicks by pixel position and keeps the discs of the last redraw.
#[derive(Clone, Debug)]
pub struct PointerView {
    geometry: CellGeometry,
    discs: Vec<Disc>,
    turn: Player,
}

impl PointerView {
    pub fn new(geometry: CellGeometry) -> Self {
        Self {
            geometry,
            discs: Vec::new(),
            turn: Player::default(),
        }
    }

    pub fn geometry(&self) -> &CellGeometry {
        &self.geometry
    }

    /// The board's square on screen: top-left corner and side length.
    pub fn board_rect(&self) -> ((f64, f64), f64) {
        (self.geometry.origin(), self.geometry.board_size())
    }

    /// Discs as of the last redraw, row by row from A1.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// The player to move as of the last redraw.
    pub fn turn(&self) -> Player {
        self.turn
    }
}

impl View for PointerView {
    type Input = (f64, f64);
    type Error = Infallible;

    fn resolve(&self, &(px, py): &(f64, f64)) -> Option<Location> {
        self.geometry.locate(px, py)
    }

    fn state_changed(&mut self, engine: &BoardEngine) -> Result<(), Infallible> {
        let geometry = self.geometry;
        self.discs = (0..NUM_SPACES as u8)
            .rev()
            .map(Location::from_index)
            .filter_map(|location| {
                engine.cell(location).owner().map(|player| Disc {
                    location,
                    origin: geometry.cell_origin(location),
                    size: geometry.cell_size(),
                    player,
                })
            })
            .collect();
        self.turn = engine.current_turn();
        Ok(())
    }
}
