// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Kropki: a deterministic turn-based engine for the dots territory-capture
//! game.
//!
//! Players alternate placing dots on a rectangular grid of intersections and
//! connecting their own dots with short segments. When a run of connections
//! closes a loop - or reaches the grid border at both ends to form a
//! barricade - the enclosed area is captured: opponent dots inside are
//! deactivated and the capturer scores.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Host (CLI / terminal UI)        │
//! ├─────────────────────────────────────┤
//! │   Command surface + notifications   │
//! ├─────────────────────────────────────┤
//! │  Stage machine · stores · closure   │
//! │  search · capture sweep             │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine is synchronous and single-threaded: every command runs to
//! completion - including closure search and capture - before returning, and
//! illegal moves are rejected with `false` and no state change.

pub mod engine;

// Re-export key engine types at crate root for convenience
pub use engine::{
    CAPTURE_POINTS, Dot, DotId, GameEngine, GameEvent, InvariantViolation, MAX_PLAYERS, PlayerId,
    Stage, assert_invariants, check_invariants,
};
