//! Output formatting utilities for CLI.

use kropki::{GameEngine, Stage};
use serde::Serialize;

/// JSON-serializable match report.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchReport {
    /// Grid rows.
    pub(super) rows: i32,
    /// Grid columns.
    pub(super) columns: i32,
    /// Configured rounds.
    pub(super) turn_limit: i32,
    /// Rounds remaining when the script ended.
    pub(super) turns_left: i32,
    /// Whether the game reached its end stage.
    pub(super) finished: bool,
    /// Moves submitted by the script.
    pub(super) moves_total: usize,
    /// Moves the engine rejected.
    pub(super) moves_rejected: usize,
    /// Per-player results.
    pub(super) players: Vec<JsonPlayerReport>,
}

/// JSON-serializable per-player result.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayerReport {
    /// Player display name.
    pub(super) name: String,
    /// Final score.
    pub(super) score: u32,
    /// Dots placed by this player.
    pub(super) dots: usize,
    /// Dots of this player captured by opponents.
    pub(super) captured: usize,
    /// Permanent lines owned by this player.
    pub(super) lines: usize,
}

impl JsonMatchReport {
    /// Snapshot the engine after a scripted run.
    pub(super) fn from_engine(
        engine: &GameEngine,
        moves_total: usize,
        moves_rejected: usize,
    ) -> Self {
        let dots = engine.dots();

        let players = engine
            .player_names()
            .iter()
            .enumerate()
            .map(|(player, name)| JsonPlayerReport {
                name: name.clone(),
                score: engine.player_scores()[player],
                dots: dots.iter().filter(|d| d.player == player).count(),
                captured: dots
                    .iter()
                    .filter(|d| d.player == player && !d.active)
                    .count(),
                lines: engine.lines(player).len(),
            })
            .collect();

        Self {
            rows: engine.rows(),
            columns: engine.columns(),
            turn_limit: engine.turn_limit(),
            turns_left: engine.turns_left(),
            finished: engine.stage() == Stage::End,
            moves_total,
            moves_rejected,
            players,
        }
    }
}

/// Format a match report as human-readable text.
pub(super) fn format_text(report: &JsonMatchReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Match on {}x{} grid, {} rounds ({} left{})\n",
        report.rows,
        report.columns,
        report.turn_limit,
        report.turns_left,
        if report.finished { ", finished" } else { "" },
    ));
    output.push_str(&format!(
        "  Moves: {} submitted, {} rejected\n\n",
        report.moves_total, report.moves_rejected
    ));

    let leading = report.players.iter().map(|p| p.score).max().unwrap_or(0);
    for player in &report.players {
        output.push_str(&format!(
            "  {}: {} points ({} dots, {} captured, {} lines)",
            player.name, player.score, player.dots, player.captured, player.lines
        ));
        if leading > 0 && player.score == leading {
            output.push_str("  <- leading");
        }
        output.push('\n');
    }

    output
}
