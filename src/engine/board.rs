//! Dot and line store.
//!
//! Owns every dot ever placed and every permanent line ever drawn in the
//! current game. Dots and lines are arena-allocated and addressed by index,
//! so identity comparison is a plain integer comparison and references never
//! dangle.

use crate::engine::dot::{Dot, DotId, Line, PlayerId};

/// Arena of all placed dots and finalized lines.
#[derive(Debug, Clone, Default)]
pub(crate) struct Board {
    dots: Vec<Dot>,
    lines: Vec<Line>,
}

impl Board {
    /// Create an empty store.
    pub(crate) const fn new() -> Self {
        Self {
            dots: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Look up the dot with the given identifier.
    ///
    /// Identifiers handed out by [`Board::add_dot`] stay valid for the whole
    /// game, so lookups through them cannot fail.
    pub(crate) fn dot(&self, id: DotId) -> &Dot {
        &self.dots[id]
    }

    /// Mutable access to a dot (used by the capture sweep).
    pub(crate) fn dot_mut(&mut self, id: DotId) -> &mut Dot {
        &mut self.dots[id]
    }

    /// Find the dot at the given coordinates, if any.
    ///
    /// At most one dot ever exists per coordinate, so the first match is the
    /// only match. The scan runs in placement order.
    pub(crate) fn find_dot(&self, x: i32, y: i32) -> Option<DotId> {
        self.dots.iter().position(|dot| dot.x == x && dot.y == y)
    }

    /// Record a newly placed dot and return its identifier.
    pub(crate) fn add_dot(&mut self, dot: Dot) -> DotId {
        self.dots.push(dot);
        self.dots.len() - 1
    }

    /// All dots in placement order.
    pub(crate) fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// All lines in creation order.
    pub(crate) fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Find the line joining the given pair, in either order.
    pub(crate) fn find_line(&self, dot1: DotId, dot2: DotId) -> Option<&Line> {
        self.lines.iter().find(|line| line.joins(dot1, dot2))
    }

    /// Record a permanent line between two dots.
    pub(crate) fn add_line(&mut self, endpoint1: DotId, endpoint2: DotId) {
        self.lines.push(Line::new(endpoint1, endpoint2));
    }

    /// Dots joined to `dot` by a permanent line, in line-creation order.
    pub(crate) fn line_neighbors(&self, dot: DotId) -> impl Iterator<Item = DotId> + '_ {
        self.lines.iter().filter_map(move |line| {
            if line.endpoint1 == dot {
                Some(line.endpoint2)
            } else if line.endpoint2 == dot {
                Some(line.endpoint1)
            } else {
                None
            }
        })
    }

    /// Snapshot of all lines owned by the given player, as endpoint dots.
    pub(crate) fn lines_of(&self, player: PlayerId) -> Vec<(Dot, Dot)> {
        self.lines
            .iter()
            .filter(|line| self.dots[line.endpoint1].player == player)
            .map(|line| (self.dots[line.endpoint1], self.dots[line.endpoint2]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dot_by_coordinates() {
        let mut board = Board::new();
        let a = board.add_dot(Dot::new(0, 1, 2));
        let b = board.add_dot(Dot::new(1, 2, 2));

        assert_eq!(board.find_dot(1, 2), Some(a));
        assert_eq!(board.find_dot(2, 2), Some(b));
        assert_eq!(board.find_dot(0, 0), None);
    }

    #[test]
    fn test_find_line_either_order() {
        let mut board = Board::new();
        let a = board.add_dot(Dot::new(0, 0, 0));
        let b = board.add_dot(Dot::new(0, 1, 0));
        board.add_line(a, b);

        assert!(board.find_line(a, b).is_some());
        assert!(board.find_line(b, a).is_some());
        assert!(board.find_line(a, a).is_none());
    }

    #[test]
    fn test_line_neighbors_in_creation_order() {
        let mut board = Board::new();
        let a = board.add_dot(Dot::new(0, 1, 1));
        let b = board.add_dot(Dot::new(0, 2, 1));
        let c = board.add_dot(Dot::new(0, 1, 2));
        board.add_line(a, b);
        board.add_line(c, a);

        let neighbors: Vec<DotId> = board.line_neighbors(a).collect();
        assert_eq!(neighbors, vec![b, c]);
    }

    #[test]
    fn test_lines_of_filters_by_owner() {
        let mut board = Board::new();
        let a = board.add_dot(Dot::new(0, 0, 0));
        let b = board.add_dot(Dot::new(0, 1, 0));
        let c = board.add_dot(Dot::new(1, 3, 3));
        let d = board.add_dot(Dot::new(1, 4, 3));
        board.add_line(a, b);
        board.add_line(c, d);

        assert_eq!(board.lines_of(0).len(), 1);
        assert_eq!(board.lines_of(1).len(), 1);
        assert_eq!(board.lines_of(0)[0].0, Dot::new(0, 0, 0));
    }
}
