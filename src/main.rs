//! Kropki CLI - play and script the dots territory-capture game.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Kropki - a deterministic engine for the dots territory-capture game
#[derive(Parser, Debug)]
#[command(name = "kropki")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive two-player game in the terminal
    Play {
        /// Grid rows
        #[arg(short, long, default_value = "10")]
        rows: i32,

        /// Grid columns
        #[arg(short, long, default_value = "10")]
        columns: i32,

        /// Number of rounds
        #[arg(short, long, default_value = "20")]
        turns: i32,
    },

    /// Run a scripted move list and report the outcome
    Script {
        /// Move list file (JSON)
        #[arg(required = true)]
        moves: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            rows,
            columns,
            turns,
        } => cli::play::execute(rows, columns, turns),

        Commands::Script { moves, format } => cli::script::execute(&moves, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
