//! Views draw an engine's state and turn raw input into board locations.

mod pointer;
mod terminal;
mod view;

pub use pointer::{Disc, PointerView};
pub use terminal::{Markers, TerminalView};
pub use view::View;
