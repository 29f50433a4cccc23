//! Engine invariants - sanity checks that detect bugs.
//!
//! These should NEVER trigger in a correctly implemented engine: the command
//! surface rejects every move that would violate them. If one fires, it
//! indicates a bug in the bookkeeping, not an illegal move by the caller.

use crate::engine::capture::CAPTURE_POINTS;
use crate::engine::state::GameEngine;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all engine invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(engine: &GameEngine) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let dots = engine.board.dots();

    // At most one dot per coordinate.
    for (i, dot) in dots.iter().enumerate() {
        for other in &dots[i + 1..] {
            if dot.x == other.x && dot.y == other.y {
                violations.push(InvariantViolation {
                    message: format!("duplicate dot at ({}, {})", dot.x, dot.y),
                });
            }
        }
    }

    // Every dot sits on the grid.
    for dot in dots {
        if !engine.grid.in_bounds(dot.x, dot.y) {
            violations.push(InvariantViolation {
                message: format!("dot at ({}, {}) is out of bounds", dot.x, dot.y),
            });
        }
    }

    // Lines join distinct recorded dots, at most once per pair, and never a
    // pair that is also pending in a chain.
    let lines = engine.board.lines();
    for (i, line) in lines.iter().enumerate() {
        if line.endpoint1 == line.endpoint2 {
            violations.push(InvariantViolation {
                message: format!("line {i} joins a dot to itself"),
            });
        }
        if line.endpoint1 >= dots.len() || line.endpoint2 >= dots.len() {
            violations.push(InvariantViolation {
                message: format!("line {i} references a missing dot"),
            });
            continue;
        }
        for (j, other) in lines.iter().enumerate().skip(i + 1) {
            if other.joins(line.endpoint1, line.endpoint2) {
                violations.push(InvariantViolation {
                    message: format!("lines {i} and {j} join the same pair"),
                });
            }
        }
        if engine.chains.connected(line.endpoint1, line.endpoint2) {
            violations.push(InvariantViolation {
                message: format!("line {i} is also pending in a chain"),
            });
        }
    }

    // Chain segments step between existing, neighboring dots.
    for (c, chain) in engine.chains.iter().enumerate() {
        for (&a, &b) in chain.iter().zip(chain.iter().skip(1)) {
            if a >= dots.len() || b >= dots.len() {
                violations.push(InvariantViolation {
                    message: format!("chain {c} references a missing dot"),
                });
                continue;
            }
            if !dots[a].is_neighbor(&dots[b]) {
                violations.push(InvariantViolation {
                    message: format!("chain {c} steps between non-neighboring dots"),
                });
            }
        }
    }

    // A captured dot's intersection is always consumed.
    for dot in dots {
        if !dot.active && engine.grid.point_active(dot.x, dot.y) {
            violations.push(InvariantViolation {
                message: format!(
                    "captured dot at ({}, {}) sits on an active point",
                    dot.x, dot.y
                ),
            });
        }
    }

    // Scores only ever grow in capture increments.
    for (player, &score) in engine.player_scores.iter().enumerate() {
        if score % CAPTURE_POINTS != 0 {
            violations.push(InvariantViolation {
                message: format!("player {player} score {score} is not a capture multiple"),
            });
        }
    }

    // Turn bookkeeping.
    if engine.turns_left > engine.turn_limit || engine.turns_left < 0 {
        violations.push(InvariantViolation {
            message: format!(
                "turns left {} outside 0..={}",
                engine.turns_left, engine.turn_limit
            ),
        });
    }
    if engine.current_player >= engine.num_players() {
        violations.push(InvariantViolation {
            message: format!("current player {} outside roster", engine.current_player),
        });
    }

    violations
}

/// Assert all engine invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with a detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(engine: &GameEngine) {
    let violations = check_invariants(engine);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Engine invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_engine: &GameEngine) {}
