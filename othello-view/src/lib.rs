//! Presentation for `othello-engine`: views that draw a game and turn user
//! input into moves, and a [`Session`] that connects one to an engine.

pub mod geometry;
pub mod session;
pub mod views;

pub use geometry::CellGeometry;
pub use session::{Outcome, Session};
pub use views::{Disc, Markers, PointerView, TerminalView, View};
