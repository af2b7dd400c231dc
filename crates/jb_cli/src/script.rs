//! Move scripts: a JSON list of moves replayed from kick-off.
//!
//! ```json
//! { "moves": [ { "piece_id": "A-5", "to": { "x": 3, "y": 5 } } ] }
//! ```

use anyhow::{Context, Result};
use jb_core::{GameState, MoveOutcome, Position, RuleEngine};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptedMove {
    pub piece_id: String,
    pub to: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveScript {
    pub moves: Vec<ScriptedMove>,
}

impl MoveScript {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse script {}", path.display()))
    }

    /// Play every move in order, stopping early once the match is over.
    /// Returns one outcome per attempted move.
    pub fn replay(&self, engine: &RuleEngine) -> Vec<MoveOutcome> {
        let mut state: GameState = engine.new_game();
        let mut outcomes = Vec::with_capacity(self.moves.len());

        for step in &self.moves {
            if state.is_finished() {
                break;
            }
            let outcome = engine.play_move(&state, &step.piece_id, step.to);
            state = outcome.state.clone();
            outcomes.push(outcome);
        }
        outcomes
    }
}

/// One-line summary of an outcome for terminal output.
pub fn describe(step: &ScriptedMove, outcome: &MoveOutcome) -> String {
    let mut line = format!("{} -> {}", step.piece_id, step.to);
    match (outcome.report(), outcome.rejection()) {
        (Some(report), _) => {
            if let Some(method) = report.steal {
                line.push_str(&format!(" | steal ({method:?})"));
            }
            if let Some(side) = report.goal {
                line.push_str(&format!(" | GOAL {side}"));
            }
            if let Some(side) = report.winner {
                line.push_str(&format!(" | {side} wins"));
            }
            if report.turn_ended && report.winner.is_none() {
                line.push_str(&format!(" | {} to move", outcome.state.current_player));
            }
        }
        (None, Some(reason)) => line.push_str(&format!(" | rejected: {reason}")),
        (None, None) => {}
    }
    line
}
