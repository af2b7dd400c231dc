use serde::{Deserialize, Serialize};

use super::board::Board;
use super::piece::Side;
use crate::error::{CoreError, Result};

/// Actions granted at the start of every turn.
pub const ACTIONS_PER_TURN: u8 = 2;

/// Goals needed to win.
pub const GOALS_TO_WIN: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub a: u32,
    pub b: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    pub fn credit(&mut self, side: Side) {
        match side {
            Side::A => self.a = self.a.saturating_add(1),
            Side::B => self.b = self.b.saturating_add(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Finished,
}

/// Immutable snapshot of a game.
///
/// Every accepted move produces a fresh value; callers keep the latest one as
/// the single source of truth.
///
/// Deserialization rejects snapshots whose status, winner and action budget
/// disagree; limits that depend on the rules are checked by
/// [`RuleEngine::check_state`](crate::engine::RuleEngine::check_state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState", into = "RawGameState")]
pub struct GameState {
    pub board: Board,
    pub current_player: Side,
    pub actions_left: u8,
    pub score: Score,
    pub status: GameStatus,
    pub winner: Option<Side>,
}

#[derive(Serialize, Deserialize)]
struct RawGameState {
    board: Board,
    current_player: Side,
    actions_left: u8,
    score: Score,
    status: GameStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<Side>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = CoreError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let state = GameState {
            board: raw.board,
            current_player: raw.current_player,
            actions_left: raw.actions_left,
            score: raw.score,
            status: raw.status,
            winner: raw.winner,
        };
        state.check_consistency()?;
        Ok(state)
    }
}

impl From<GameState> for RawGameState {
    fn from(state: GameState) -> Self {
        RawGameState {
            board: state.board,
            current_player: state.current_player,
            actions_left: state.actions_left,
            score: state.score,
            status: state.status,
            winner: state.winner,
        }
    }
}

impl GameState {
    /// Kick-off state: initial layout, side A to move with a full action budget.
    pub fn initial() -> Self {
        Self::with_actions(ACTIONS_PER_TURN)
    }

    pub(crate) fn with_actions(actions_per_turn: u8) -> Self {
        Self {
            board: Board::initial(),
            current_player: Side::A,
            actions_left: actions_per_turn,
            score: Score::default(),
            status: GameStatus::Playing,
            winner: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// A finished game has a winner, a running one has none and at least one
    /// action left.
    pub fn check_consistency(&self) -> Result<()> {
        let problem = match (self.status, self.winner) {
            (GameStatus::Finished, None) => "finished game without a winner",
            (GameStatus::Playing, Some(_)) => "running game already has a winner",
            (GameStatus::Playing, None) if self.actions_left == 0 => "turn has no actions left",
            _ => return Ok(()),
        };
        Err(CoreError::InvalidState(problem.into()))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// `createInitialState` of the public API.
pub fn create_initial_state() -> GameState {
    GameState::initial()
}
