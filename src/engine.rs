//! Game engine for the dots territory-capture game.
//!
//! Implements the full rule set on a rectangular grid of intersections:
//! - Stage machine driving place-dot and connect-dots turns
//! - Dot, line and chain bookkeeping in index-addressed arenas
//! - Chain closure search over previously drawn connections
//! - Barricade detection against the grid borders
//! - Scanline capture of sealed areas with scoring

mod board;
mod capture;
mod chain;
mod closure;
mod dot;
mod event;
mod grid;
mod invariants;
mod search;
mod state;

pub use capture::CAPTURE_POINTS;
pub use dot::{Dot, DotId, PlayerId};
pub use event::GameEvent;
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use state::{GameEngine, MAX_PLAYERS, Stage};
