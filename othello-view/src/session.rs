//! Drives a [`BoardEngine`] from a [`View`]'s input.

use crate::views::View;
use log::{debug, info};
use othello_engine::{BoardEngine, Location};

/// What became of one input event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The move was played and the view was redrawn.
    Accepted(Location),
    /// The input named a location, but the move there is illegal.
    Rejected(Location),
    /// The input did not name a board location.
    Unresolved,
}

impl Outcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }
}

/// One game shown through one view.
pub struct Session<V: View> {
    engine: BoardEngine,
    view: V,
}

impl<V: View> Session<V> {
    /// Start a session from the standard opening.
    pub fn new(view: V) -> Self {
        Self::with_engine(BoardEngine::new(), view)
    }

    pub fn with_engine(engine: BoardEngine, view: V) -> Self {
        Self { engine, view }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Draw the initial state.
    pub fn start(&mut self) -> Result<(), V::Error> {
        info!("{} to move", self.engine.current_turn());
        self.view.state_changed(&self.engine)
    }

    /// Resolve an input event and try it as a move. The view is redrawn only
    /// when the move is accepted.
    pub fn handle(&mut self, input: &V::Input) -> Result<Outcome, V::Error> {
        let loc = match self.view.resolve(input) {
            Some(loc) => loc,
            None => return Ok(Outcome::Unresolved),
        };

        let (x, y) = loc.to_coords();
        if !self.engine.attempt_move(i32::from(x), i32::from(y)) {
            debug!("ignoring illegal move at {}", loc);
            return Ok(Outcome::Rejected(loc));
        }

        self.view.state_changed(&self.engine)?;
        Ok(Outcome::Accepted(loc))
    }
}
