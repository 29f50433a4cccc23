//! Dot and line piece types.

use serde::Serialize;

/// Index of a player in the roster (0-based).
pub type PlayerId = usize;

/// Stable identifier of a dot in the engine's arena.
///
/// Dots are never deleted during a game, so an id stays valid until the next
/// `new_game`.
pub type DotId = usize;

/// A placed, player-owned marker on a grid intersection.
///
/// A dot may be captured (deactivated) but never removed; its position and
/// ownership are immutable once placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    /// Owner of this dot.
    pub player: PlayerId,
    /// X coordinate (column intersection).
    pub x: i32,
    /// Y coordinate (row intersection).
    pub y: i32,
    /// Whether this dot is still in play. Captured dots stay on the board
    /// deactivated and can still anchor lines.
    pub active: bool,
}

impl Dot {
    /// Create a new active dot owned by the given player.
    #[must_use]
    pub const fn new(player: PlayerId, x: i32, y: i32) -> Self {
        Self {
            player,
            x,
            y,
            active: true,
        }
    }

    /// Check if the other dot lies within this dot's 8-neighborhood
    /// (Chebyshev distance at most 1).
    #[must_use]
    pub const fn is_neighbor(&self, other: &Dot) -> bool {
        (self.x - other.x).abs() < 2 && (self.y - other.y).abs() < 2
    }

    /// Take this dot out of play. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// A permanent, undirected connection between two dots.
///
/// Lines are created only when a completed chain is finalized and are never
/// removed for the rest of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line {
    /// First endpoint (the order carries no meaning).
    pub(crate) endpoint1: DotId,
    /// Second endpoint.
    pub(crate) endpoint2: DotId,
}

impl Line {
    /// Create a line joining two dots.
    pub(crate) const fn new(endpoint1: DotId, endpoint2: DotId) -> Self {
        Self {
            endpoint1,
            endpoint2,
        }
    }

    /// Check if the line touches the given dot.
    pub(crate) const fn has_endpoint(&self, dot: DotId) -> bool {
        self.endpoint1 == dot || self.endpoint2 == dot
    }

    /// Check if the line joins the given pair, in either order.
    pub(crate) const fn joins(&self, dot1: DotId, dot2: DotId) -> bool {
        (self.endpoint1 == dot1 && self.endpoint2 == dot2)
            || (self.endpoint1 == dot2 && self.endpoint2 == dot1)
    }
}
