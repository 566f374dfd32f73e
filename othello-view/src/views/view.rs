use othello_engine::{BoardEngine, Location};

/// The presentation side of a game: something that can show an engine and
/// interpret what the user did.
///
/// A view never changes the engine. It is told when the state has changed and
/// reads everything it needs back out of the engine.
pub trait View {
    /// A raw input event, such as a line of text or a click.
    type Input: ?Sized;

    /// Error raised while drawing.
    type Error;

    /// Map a raw input event to the board location it refers to, if any.
    fn resolve(&self, input: &Self::Input) -> Option<Location>;

    /// The engine's state has changed: redraw from it.
    fn state_changed(&mut self, engine: &BoardEngine) -> Result<(), Self::Error>;
}
