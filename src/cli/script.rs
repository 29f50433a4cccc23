//! Script command implementation.
//!
//! Drives an engine from a JSON move list. Useful for demos and for
//! reproducing a sequence of moves from a bug report.

use super::output::{JsonMatchReport, format_text};
use super::{CliError, OutputFormat};
use kropki::GameEngine;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A scripted match: grid setup plus the move list.
#[derive(Debug, Deserialize)]
struct Script {
    /// Grid rows.
    rows: i32,
    /// Grid columns.
    columns: i32,
    /// Number of rounds.
    turn_limit: i32,
    /// Optional player names.
    #[serde(default)]
    players: Vec<String>,
    /// Moves, applied in order.
    moves: Vec<Move>,
}

/// One scripted move.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Move {
    /// Place a dot for the current player.
    Place {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
    },
    /// Connect two of the current player's dots.
    Connect {
        /// First endpoint x.
        x1: i32,
        /// First endpoint y.
        y1: i32,
        /// Second endpoint x.
        x2: i32,
        /// Second endpoint y.
        y2: i32,
    },
    /// End the current player's turn.
    EndTurn,
}

/// Execute the script command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the grid
/// setup is invalid.
pub(crate) fn execute(path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
    let script: Script = serde_json::from_str(&text)
        .map_err(|e| CliError::new(format!("Failed to parse {}: {e}", path.display())))?;

    let mut engine = GameEngine::new();
    if !engine.new_game(script.rows, script.columns, script.turn_limit) {
        return Err(CliError::new(format!(
            "Invalid grid setup: {}x{} with {} rounds",
            script.rows, script.columns, script.turn_limit
        )));
    }

    if !script.players.is_empty() && !engine.set_player_names(script.players.clone()) {
        return Err(CliError::new(format!(
            "Expected {} player names, got {}",
            engine.num_players(),
            script.players.len()
        )));
    }

    let mut rejected = 0;
    for &step in &script.moves {
        let accepted = match step {
            Move::Place { x, y } => engine.place_dot(x, y),
            Move::Connect { x1, y1, x2, y2 } => engine.connect_dots(x1, y1, x2, y2),
            Move::EndTurn => {
                engine.end_turn();
                true
            }
        };
        if !accepted {
            rejected += 1;
        }
    }

    let report = JsonMatchReport::from_engine(&engine, script.moves.len(), rejected);

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{json}");
        }
    }

    Ok(())
}
