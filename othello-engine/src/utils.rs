//! Miscellaneous project utilities.

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

/// Column labels, west to east.
pub const COLUMN_LABELS: &str = "ABCDEFGH";

/// Row labels, north to south.
pub const ROW_LABELS: &str = "12345678";

/// Format one marker per cell into a labelled grid.
/// `markers` must yield exactly [`NUM_SPACES`] items, in row-major order from A1.
pub fn format_grid<T: Iterator<Item = char>>(markers: T, f: &mut Formatter) -> fmt::Result {
    let markers: Vec<char> = markers.collect();
    if markers.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    write!(f, "  ")?;
    for label in COLUMN_LABELS.chars() {
        write!(f, " {}", label)?;
    }

    for (row, label) in markers.chunks(EDGE_LENGTH).zip(ROW_LABELS.chars()) {
        write!(f, "\n {} ", label)?;
        for marker in row {
            write!(f, "{} ", marker)?;
        }
    }

    Ok(())
}
