//! Area capture: the scanline sweep over a sealed boundary.

use std::collections::HashMap;

use crate::engine::board::Board;
use crate::engine::dot::{DotId, PlayerId};
use crate::engine::grid::Grid;

/// Points awarded for each opponent dot captured inside a sealed area.
pub const CAPTURE_POINTS: u32 = 10;

/// Outcome of a capture sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CaptureResult {
    /// Number of opponent dots deactivated by this sweep.
    pub(crate) captured: u32,
    /// Points awarded to the capturer.
    pub(crate) points: u32,
}

/// Sweep the area enclosed by `boundary` for the given capturer.
///
/// For each row strictly inside the boundary's vertical span, every
/// intersection strictly between that row's leftmost and rightmost boundary
/// dots is resolved: an active opponent dot there is deactivated and scored,
/// and the intersection itself is disabled whether or not a dot occupied it,
/// so the same territory can never be captured or built on again.
pub(crate) fn capture_area(
    board: &mut Board,
    grid: &mut Grid,
    boundary: &[DotId],
    capturer: PlayerId,
) -> CaptureResult {
    let mut min_y = grid.rows();
    let mut max_y = 0;
    let mut left_bounds: HashMap<i32, i32> = HashMap::new();
    let mut right_bounds: HashMap<i32, i32> = HashMap::new();

    for &id in boundary {
        let dot = *board.dot(id);

        min_y = min_y.min(dot.y);
        max_y = max_y.max(dot.y);

        let left = left_bounds.entry(dot.y).or_insert(grid.columns());
        *left = (*left).min(dot.x);
        let right = right_bounds.entry(dot.y).or_insert(0);
        *right = (*right).max(dot.x);
    }

    let mut result = CaptureResult::default();

    for y in (min_y + 1)..max_y {
        let (Some(&left), Some(&right)) = (left_bounds.get(&y), right_bounds.get(&y)) else {
            continue;
        };

        for x in (left + 1)..right {
            if let Some(id) = board.find_dot(x, y) {
                let dot = board.dot_mut(id);
                if dot.player != capturer && dot.active {
                    dot.deactivate();
                    result.captured += 1;
                    result.points += CAPTURE_POINTS;
                }
            }

            grid.deactivate_point(x, y);
        }
    }

    result
}
