//! The game engine: stage machine, command surface and finalization.

use serde::Serialize;

use crate::engine::board::Board;
use crate::engine::capture;
use crate::engine::chain::ChainSet;
use crate::engine::closure;
use crate::engine::dot::{Dot, DotId, PlayerId};
use crate::engine::event::GameEvent;
use crate::engine::grid::Grid;
use crate::engine::search::Links;

/// Maximum number of players in a game.
pub const MAX_PLAYERS: usize = 8;

/// Number of players when none is specified.
const DEFAULT_NUM_PLAYERS: usize = 2;

/// The engine's top-level mode, gating which commands are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// The current player must place one dot.
    PlaceDot,
    /// The current player may draw connections between their dots.
    ConnectDots,
    /// The game is over; every mutating command is rejected.
    End,
}

/// The complete game state and its command surface.
///
/// One engine instance owns every dot, line and chain for the lifetime of a
/// game; `new_game` discards and replaces all of them. All commands run to
/// completion before returning and reject illegal moves with `false`, leaving
/// the state untouched.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) grid: Grid,
    pub(crate) board: Board,
    pub(crate) chains: ChainSet,
    pub(crate) stage: Stage,
    pub(crate) turn_limit: i32,
    pub(crate) turns_left: i32,
    pub(crate) current_player: PlayerId,
    pub(crate) player_names: Vec<String>,
    pub(crate) player_scores: Vec<u32>,
    events: Vec<GameEvent>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a two-player engine. No game is in progress until `new_game`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_players(DEFAULT_NUM_PLAYERS).unwrap_or_else(|| unreachable!())
    }

    /// Create an engine for 2 to [`MAX_PLAYERS`] players.
    ///
    /// Returns `None` for a roster size outside that range.
    #[must_use]
    pub fn with_players(num_players: usize) -> Option<Self> {
        if !(2..=MAX_PLAYERS).contains(&num_players) {
            return None;
        }

        let player_names = (1..=num_players).map(|i| format!("Player {i}")).collect();

        Some(Self {
            grid: Grid::empty(),
            board: Board::new(),
            chains: ChainSet::new(),
            stage: Stage::End,
            turn_limit: 0,
            turns_left: 0,
            current_player: 0,
            player_names,
            player_scores: vec![0; num_players],
            events: Vec::new(),
        })
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the notifications accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ---- read accessors -------------------------------------------------

    /// Number of players in the roster.
    #[must_use]
    pub fn num_players(&self) -> usize {
        self.player_names.len()
    }

    /// Number of rows (0 before the first game).
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.grid.rows().max(0)
    }

    /// Number of columns (0 before the first game).
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.grid.columns().max(0)
    }

    /// The configured number of rounds.
    #[must_use]
    pub const fn turn_limit(&self) -> i32 {
        self.turn_limit
    }

    /// Rounds remaining before the game ends.
    #[must_use]
    pub const fn turns_left(&self) -> i32 {
        self.turns_left
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Player display names, by player index.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    /// Replace the player display names.
    ///
    /// Accepted only when the list length matches the roster size.
    pub fn set_player_names(&mut self, names: Vec<String>) -> bool {
        if names.len() != self.num_players() {
            return false;
        }
        self.player_names = names;
        self.emit(GameEvent::PlayerNamesChanged);
        true
    }

    /// Player scores, by player index.
    #[must_use]
    pub fn player_scores(&self) -> &[u32] {
        &self.player_scores
    }

    /// The dot at the given coordinates, if any.
    #[must_use]
    pub fn dot_at(&self, x: i32, y: i32) -> Option<Dot> {
        self.board.find_dot(x, y).map(|id| *self.board.dot(id))
    }

    /// Snapshot of all dots in placement order.
    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        self.board.dots().to_vec()
    }

    /// Snapshot of the given player's lines, as endpoint pairs.
    #[must_use]
    pub fn lines(&self, player: PlayerId) -> Vec<(Dot, Dot)> {
        self.board.lines_of(player)
    }

    /// Snapshot of all pending chains, as dot sequences.
    #[must_use]
    pub fn chains(&self) -> Vec<Vec<Dot>> {
        self.chains
            .iter()
            .map(|chain| chain.iter().map(|&id| *self.board.dot(id)).collect())
            .collect()
    }

    /// Check if a dot could be placed at the given coordinates.
    ///
    /// Out-of-bounds coordinates, consumed intersections and occupied
    /// intersections all report `false`.
    #[must_use]
    pub fn can_place_dot(&self, x: i32, y: i32) -> bool {
        self.grid.point_active(x, y) && self.board.find_dot(x, y).is_none()
    }

    /// Check if the two dots could be connected by the current player.
    #[must_use]
    pub fn can_connect_dots(&self, dot1: &Dot, dot2: &Dot) -> bool {
        let Some(id1) = self.board.find_dot(dot1.x, dot1.y) else {
            return false;
        };
        let Some(id2) = self.board.find_dot(dot2.x, dot2.y) else {
            return false;
        };
        self.can_connect_ids(id1, id2)
    }

    fn can_connect_ids(&self, id1: DotId, id2: DotId) -> bool {
        if id1 == id2 {
            return false;
        }

        let dot1 = self.board.dot(id1);
        let dot2 = self.board.dot(id2);

        if dot1.player != self.current_player || dot2.player != self.current_player {
            return false;
        }

        if !dot1.active || !dot2.active {
            return false;
        }

        if !dot1.is_neighbor(dot2)
            || self.board.find_line(id1, id2).is_some()
            || self.chains.connected(id1, id2)
        {
            return false;
        }

        if dot1.x == dot2.x || dot1.y == dot2.y {
            // Horizontal or vertical segment.
            return true;
        }

        // Diagonal segment: blocked only when both crossing dots exist and
        // the crossing diagonal is itself already drawn.
        let crossing1 = self.board.find_dot(dot1.x, dot2.y);
        let crossing2 = self.board.find_dot(dot2.x, dot1.y);
        match (crossing1, crossing2) {
            (Some(c1), Some(c2)) => self.board.find_line(c1, c2).is_none(),
            _ => true,
        }
    }

    // ---- mutating commands ----------------------------------------------

    /// Start a new game on a `rows` × `columns` grid lasting `turn_limit`
    /// rounds.
    ///
    /// All dots, lines, chains and scores are discarded. Rejected without
    /// state change when any parameter is non-positive.
    pub fn new_game(&mut self, rows: i32, columns: i32, turn_limit: i32) -> bool {
        let Some(grid) = Grid::new(rows, columns) else {
            return false;
        };
        if turn_limit <= 0 {
            return false;
        }

        self.grid = grid;
        self.board = Board::new();
        self.chains = ChainSet::new();
        self.emit(GameEvent::GameStarted);

        self.turn_limit = turn_limit;
        self.turns_left = turn_limit;
        self.emit(GameEvent::TurnsLeftChanged);

        self.current_player = 0;
        self.emit(GameEvent::CurrentPlayerChanged);

        self.stage = Stage::PlaceDot;
        self.emit(GameEvent::StageChanged);

        for score in &mut self.player_scores {
            *score = 0;
        }
        self.emit(GameEvent::PlayerScoresChanged);

        true
    }

    /// Place a dot for the current player.
    ///
    /// Legal only in the placing stage, on an active, unoccupied
    /// intersection. On success the stage advances to connecting.
    pub fn place_dot(&mut self, x: i32, y: i32) -> bool {
        if self.stage != Stage::PlaceDot {
            return false;
        }

        if !self.can_place_dot(x, y) {
            return false;
        }

        self.board.add_dot(Dot::new(self.current_player, x, y));

        self.stage = Stage::ConnectDots;
        self.emit(GameEvent::StageChanged);
        true
    }

    /// Connect two of the current player's dots.
    ///
    /// Legal only in the connecting stage, for an existing, legal pair (see
    /// [`GameEngine::can_connect_dots`]). On success the pair joins a pending
    /// chain and every window of that chain is checked for completion; the
    /// return value reports acceptance of the connection, independent of
    /// whether anything completed.
    pub fn connect_dots(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        if self.stage != Stage::ConnectDots {
            return false;
        }

        let Some(id1) = self.board.find_dot(x1, y1) else {
            return false;
        };
        let Some(id2) = self.board.find_dot(x2, y2) else {
            return false;
        };

        if !self.can_connect_ids(id1, id2) {
            return false;
        }

        let index = self.chains.add(id1, id2);
        let snapshot = self.chains.snapshot(index);

        // Evaluate every window of the mutated chain, longest tail first.
        // Earlier windows may finalize segments; later windows then see the
        // updated lines and chains.
        let len = snapshot.len();
        for head in 0..len.saturating_sub(1) {
            for tail in ((head + 1)..len).rev() {
                self.complete_chain(&snapshot[head..=tail]);
            }
        }

        self.emit(GameEvent::ChainsChanged);
        true
    }

    /// End the current player's turn.
    ///
    /// Pending chains are discarded. The round counter ticks down after the
    /// last player's turn; when it reaches zero the game ends, otherwise the
    /// next player starts placing. A no-op once the game is over.
    pub fn end_turn(&mut self) {
        if self.turns_left <= 0 {
            return;
        }

        self.chains.clear();
        self.emit(GameEvent::TurnEnded);

        if self.current_player == self.num_players() - 1 {
            self.turns_left -= 1;
            self.emit(GameEvent::TurnsLeftChanged);
        }

        if self.turns_left > 0 {
            self.current_player = (self.current_player + 1) % self.num_players();
            self.emit(GameEvent::CurrentPlayerChanged);

            self.stage = Stage::PlaceDot;
        } else {
            self.stage = Stage::End;
        }
        self.emit(GameEvent::StageChanged);
    }

    // ---- completion -----------------------------------------------------

    /// Check one window of a chain for completion and, if it completes,
    /// capture and finalize it.
    fn complete_chain(&mut self, window: &[DotId]) {
        let sealed = {
            let links = Links::new(&self.board, &self.chains);

            if window.len() > 1 && window.first() == window.last() {
                // Already a closed loop.
                Some(window.to_vec())
            } else if let Some(closed) = closure::close_chain(&links, window) {
                Some(closed)
            } else {
                closure::form_barricade(&links, &self.grid, window)
            }
        };

        let Some(boundary) = sealed else {
            return;
        };

        let result = capture::capture_area(
            &mut self.board,
            &mut self.grid,
            &boundary,
            self.current_player,
        );
        if result.captured > 0 {
            self.player_scores[self.current_player] += result.points;
            self.emit(GameEvent::PlayerScoresChanged);
        }

        self.finalize_chain(&boundary);
    }

    /// Commit every still-pending segment of the sequence as a permanent
    /// line, cutting it out of its chain.
    fn finalize_chain(&mut self, sequence: &[DotId]) {
        for pair in sequence.windows(2) {
            let (dot1, dot2) = (pair[0], pair[1]);
            if let Some(index) = self.chains.find(dot1, dot2) {
                self.chains.cut(index, dot1, dot2);
                self.board.add_line(dot1, dot2);
            }
        }
    }
}
