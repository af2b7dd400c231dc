use serde::{Deserialize, Serialize};

use crate::models::{GameState, Side};
use crate::rules::{MoveRejection, StealMethod};

/// What an accepted move caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveReport {
    /// Possession taken from the opponent by this move
    pub steal: Option<StealMethod>,
    /// Side credited with a goal at the end of this turn
    pub goal: Option<Side>,
    /// Set when the goal ended the match
    pub winner: Option<Side>,
    /// The action budget ran out on this move
    pub turn_ended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum MoveResult {
    Accepted(MoveReport),
    Rejected { reason: MoveRejection },
}

/// Resulting snapshot plus a description of what happened.
///
/// On rejection `state` equals the input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub result: MoveResult,
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self.result, MoveResult::Accepted(_))
    }

    pub fn report(&self) -> Option<&MoveReport> {
        match &self.result {
            MoveResult::Accepted(report) => Some(report),
            MoveResult::Rejected { .. } => None,
        }
    }

    pub fn rejection(&self) -> Option<MoveRejection> {
        match self.result {
            MoveResult::Accepted(_) => None,
            MoveResult::Rejected { reason } => Some(reason),
        }
    }
}
