//! Closure resolution: loop completion and barricade formation.
//!
//! After every accepted connection, each window of the mutated chain is
//! checked for completion. A window completes by closing into a loop through
//! previously drawn connections, or by extending both open ends to the grid
//! border to form a barricade.

use crate::engine::dot::DotId;
use crate::engine::grid::Grid;
use crate::engine::search::Links;

/// Try to close the window into a loop through existing lines and chains.
///
/// Both ends must already carry at least one connection besides the window
/// itself (degree ≥ 2), and the window needs at least three dots; a two-dot
/// window has nothing to close. On success the returned sequence is the
/// window followed by the discovered return path, ending back at the window's
/// first dot.
pub(crate) fn close_chain(links: &Links<'_>, window: &[DotId]) -> Option<Vec<DotId>> {
    if window.len() < 3 {
        return None;
    }

    let start = window[0];
    let end = window[window.len() - 1];

    if links.connected_dots(start).len() < 2 || links.connected_dots(end).len() < 2 {
        return None;
    }

    let (target_x, target_y) = {
        let dot = links.dot(end);
        (dot.x, dot.y)
    };

    let path = links.find_path(window, |dot| dot.x == target_x && dot.y == target_y)?;

    // Splice the return path in reverse, dropping its goal entry: the result
    // runs start → ... → end → ... → start.
    let mut closed = window.to_vec();
    closed.extend(path[..path.len() - 1].iter().rev());
    Some(closed)
}

/// Extend the window to the grid border at both ends.
///
/// Either end already on the border stands; otherwise a path to any border
/// dot is searched through the connection graph. Returns the border-to-border
/// sequence, or `None` if either end cannot reach the border.
fn extend_to_borders(links: &Links<'_>, grid: &Grid, window: &[DotId]) -> Option<Vec<DotId>> {
    let on_border = |dot: &crate::engine::dot::Dot| grid.on_border(dot.x, dot.y);

    let mut extended = Vec::new();

    if !on_border(links.dot(window[0])) {
        let path = links.find_path(window, on_border)?;
        // Prepend the path reversed, without its start entry (the window's
        // own first dot).
        extended.extend(path[1..].iter().rev());
    }

    extended.extend_from_slice(window);

    if !on_border(links.dot(window[window.len() - 1])) {
        let reversed: Vec<DotId> = window.iter().rev().copied().collect();
        let path = links.find_path(&reversed, on_border)?;
        extended.extend(&path[1..]);
    }

    Some(extended)
}

/// Try to form a barricade off the grid's borders.
///
/// The extended sequence must step between true grid neighbors throughout.
/// It is accepted when its bounding box spans both axes (sealing a pocket
/// against the border), or when it is a straight cut whose endpoints sit on
/// opposite borders of a single axis. Returns the accepted border-to-border
/// sequence.
pub(crate) fn form_barricade(
    links: &Links<'_>,
    grid: &Grid,
    window: &[DotId],
) -> Option<Vec<DotId>> {
    let extended = extend_to_borders(links, grid, window)?;

    let mut min_x = grid.columns();
    let mut min_y = grid.rows();
    let mut max_x = 0;
    let mut max_y = 0;

    for (index, &id) in extended.iter().enumerate() {
        let dot = links.dot(id);

        if let Some(&next) = extended.get(index + 1) {
            if !dot.is_neighbor(links.dot(next)) {
                return None;
            }
        }

        min_x = min_x.min(dot.x);
        max_x = max_x.max(dot.x);
        min_y = min_y.min(dot.y);
        max_y = max_y.max(dot.y);
    }

    // Seals off some space against the border.
    if max_x - min_x > 0 && max_y - min_y > 0 {
        return Some(extended);
    }

    // Or cuts across the entire horizontal or vertical span.
    let first = links.dot(extended[0]);
    let last = links.dot(extended[extended.len() - 1]);
    let full_cut = (first.x == 0 && last.x == grid.columns())
        || (first.x == grid.columns() && last.x == 0)
        || (first.y == 0 && last.y == grid.rows())
        || (first.y == grid.rows() && last.y == 0);

    full_cut.then_some(extended)
}
