//! Jumpball CLI
//!
//! Scripting front end for the rule engine: start games, apply single moves to
//! saved states, list legal destinations and replay move scripts.

mod script;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jb_core::{legal_destinations, GameState, Position, RuleEngine, RulesConfig};
use std::fs;
use std::path::{Path, PathBuf};

use script::{describe, MoveScript};

#[derive(Parser)]
#[command(name = "jumpball")]
#[command(about = "Play and replay Jumpball games", long_about = None)]
struct Cli {
    /// Rules config JSON (defaults to JB_RULES_CONFIG_PATH, then built-in rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the kick-off state
    New {
        /// Write the state to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Apply one move to a saved state
    Apply {
        /// Game state JSON file
        #[arg(long)]
        state: PathBuf,

        /// Piece id, e.g. "A-5" or "ball"
        #[arg(long)]
        piece: String,

        #[arg(long, allow_hyphen_values = true)]
        x: i32,

        #[arg(long, allow_hyphen_values = true)]
        y: i32,

        /// Write the resulting state to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// List legal destinations for a piece
    Moves {
        /// Game state JSON file
        #[arg(long)]
        state: PathBuf,

        /// Piece id
        #[arg(long)]
        piece: String,
    },

    /// Replay a move script from kick-off
    Replay {
        /// Script JSON file: {"moves": [{"piece_id": .., "to": {"x": .., "y": ..}}]}
        #[arg(long)]
        script: PathBuf,

        /// Write the final state to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = load_engine(cli.rules.as_deref())?;

    match cli.command {
        Commands::New { out } => {
            write_state(&engine.new_game(), out.as_deref())?;
        }

        Commands::Apply {
            state,
            piece,
            x,
            y,
            out,
        } => {
            let current = read_state(&state)?;
            engine
                .check_state(&current)
                .with_context(|| format!("State in {} breaks the rules", state.display()))?;
            let to = Position::new(x, y);
            let outcome = engine.play_move(&current, &piece, to);

            let step = script::ScriptedMove {
                piece_id: piece,
                to,
            };
            println!("{}", describe(&step, &outcome));
            write_state(&outcome.state, out.as_deref())?;
        }

        Commands::Moves { state, piece } => {
            let current = read_state(&state)?;
            if current.board.piece(&piece).is_none() {
                bail!("No piece with id {piece}");
            }
            let cells = legal_destinations(&current, &piece);
            if cells.is_empty() {
                println!("{piece}: no legal moves");
            } else {
                let listed: Vec<String> = cells.iter().map(Position::to_string).collect();
                println!("{piece}: {}", listed.join(" "));
            }
        }

        Commands::Replay { script, out } => {
            let script = MoveScript::from_path(&script)?;
            let outcomes = script.replay(&engine);

            for (step, outcome) in script.moves.iter().zip(&outcomes) {
                println!("{}", describe(step, outcome));
            }
            let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
            println!("{} moves, {} accepted", outcomes.len(), accepted);

            let last = outcomes
                .last()
                .map(|o| o.state.clone())
                .unwrap_or_else(|| engine.new_game());
            println!("Score A {} - {} B", last.score.a, last.score.b);
            write_state(&last, out.as_deref())?;
        }
    }

    Ok(())
}

fn load_engine(rules: Option<&Path>) -> Result<RuleEngine> {
    let config = match rules {
        Some(path) => RulesConfig::from_path(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => RulesConfig::from_env()
            .context("Failed to load rules from environment")?,
    };
    Ok(RuleEngine::new(config))
}

fn read_state(path: &Path) -> Result<GameState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid state in {}", path.display()))
}

fn write_state(state: &GameState, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    match out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("State written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
