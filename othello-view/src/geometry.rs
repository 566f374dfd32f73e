//! Map pointer positions on a drawn board to board locations.

use othello_engine::{Location, EDGE_LENGTH};

/// Where a board is drawn on screen: the pixel position of A1's top-left
/// corner and the side length of one square cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    origin: (f64, f64),
    cell_size: f64,
}

impl CellGeometry {
    /// Returns None if `cell_size` is not a positive, finite number.
    pub fn new(origin: (f64, f64), cell_size: f64) -> Option<Self> {
        if cell_size.is_finite() && cell_size > 0.0 {
            Some(Self { origin, cell_size })
        } else {
            None
        }
    }

    /// The pixel position of A1's top-left corner.
    pub fn origin(&self) -> (f64, f64) {
        self.origin
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// The side length of the whole board.
    pub fn board_size(&self) -> f64 {
        self.cell_size * EDGE_LENGTH as f64
    }

    /// The location under the point `(px, py)`, or None if the point is off the board.
    pub fn locate(&self, px: f64, py: f64) -> Option<Location> {
        let column = ((px - self.origin.0) / self.cell_size).floor();
        let row = ((py - self.origin.1) / self.cell_size).floor();
        if !column.is_finite() || !row.is_finite() {
            return None;
        }
        let edge = EDGE_LENGTH as f64;
        if column < 0.0 || row < 0.0 || column >= edge || row >= edge {
            return None;
        }
        Location::new(column as i32 + 1, row as i32 + 1)
    }

    /// The top-left pixel of a location's cell.
    pub fn cell_origin(&self, loc: Location) -> (f64, f64) {
        let (x, y) = loc.to_coords();
        (
            self.origin.0 + f64::from(x - 1) * self.cell_size,
            self.origin.1 + f64::from(y - 1) * self.cell_size,
        )
    }
}
