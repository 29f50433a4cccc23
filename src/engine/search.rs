//! Path search over the connection graph.
//!
//! The "connected dots" graph joins a dot to every dot reachable through a
//! permanent line or a pending-chain segment. The closure resolver walks this
//! graph with an iterative depth-first search, always taking the first
//! eligible neighbor, so results are deterministic for a given move history.

use std::collections::HashSet;

use crate::engine::board::Board;
use crate::engine::chain::ChainSet;
use crate::engine::dot::{Dot, DotId};

/// Check if two dots form a segment of the given chain window, in either
/// order.
pub(crate) fn window_has_edge(window: &[DotId], dot1: DotId, dot2: DotId) -> bool {
    window
        .windows(2)
        .any(|pair| (pair[0] == dot1 && pair[1] == dot2) || (pair[0] == dot2 && pair[1] == dot1))
}

/// Read-only view over the line store and the pending chains, providing the
/// connection graph for path searches.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Links<'a> {
    board: &'a Board,
    chains: &'a ChainSet,
}

impl<'a> Links<'a> {
    /// Build the view.
    pub(crate) const fn new(board: &'a Board, chains: &'a ChainSet) -> Self {
        Self { board, chains }
    }

    /// Look up a dot's data.
    pub(crate) fn dot(&self, id: DotId) -> &Dot {
        self.board.dot(id)
    }

    /// All dots connected to `dot`: line partners first in line-creation
    /// order, then chain neighbors in chain-creation order.
    pub(crate) fn connected_dots(&self, dot: DotId) -> Vec<DotId> {
        let mut connected: Vec<DotId> = self.board.line_neighbors(dot).collect();
        connected.extend(self.chains.neighbors_of(dot));
        connected
    }

    /// Depth-first search from the window's first dot for a dot satisfying
    /// `goal`.
    ///
    /// Every dot of the window counts as visited from the start, so the
    /// search cannot wander back into the window; a goal dot is accepted only
    /// if the final step is not itself a segment of the window. Returns the
    /// path from the start dot to the goal dot inclusive.
    pub(crate) fn find_path(
        &self,
        window: &[DotId],
        goal: impl Fn(&Dot) -> bool,
    ) -> Option<Vec<DotId>> {
        let &start = window.first()?;
        let mut visited: HashSet<DotId> = window.iter().copied().collect();

        // The path doubles as the DFS stack: the current dot is its last
        // element, and a dead end pops it.
        let mut path = vec![start];

        while let Some(&current) = path.last() {
            let mut next = None;

            for candidate in self.connected_dots(current) {
                if goal(self.dot(candidate)) && !window_has_edge(window, current, candidate) {
                    path.push(candidate);
                    return Some(path);
                }

                if !visited.contains(&candidate) {
                    next = Some(candidate);
                    break;
                }
            }

            match next {
                Some(candidate) => {
                    visited.insert(candidate);
                    path.push(candidate);
                }
                None => {
                    path.pop();
                }
            }
        }

        None
    }
}
