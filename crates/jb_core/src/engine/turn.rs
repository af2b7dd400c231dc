//! Turn and score state machine.
//!
//! `playing --move--> playing` while actions remain; when the budget hits zero
//! the turn ends: goals are scored, the match may finish, and otherwise the
//! turn passes to the other side. `finished` is terminal.

use super::outcome::{MoveOutcome, MoveReport, MoveResult};
use crate::config::RulesConfig;
use crate::error::{self, CoreError};
use crate::models::{is_goal_area, Board, GameState, GameStatus, Position, Side};
use crate::rules::{check_steal, validate_move, MoveRejection};

/// Applies moves under a fixed [`RulesConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleEngine {
    config: RulesConfig,
}

impl RuleEngine {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Kick-off state with this engine's action budget.
    pub fn new_game(&self) -> GameState {
        GameState::with_actions(self.config.actions_per_turn)
    }

    /// Reject snapshots that could not arise under these rules: an action
    /// budget above the per-turn allowance, a running game whose score already
    /// reached the target, or a winner short of it.
    pub fn check_state(&self, state: &GameState) -> error::Result<()> {
        state.check_consistency()?;

        let (left, budget) = (state.actions_left, self.config.actions_per_turn);
        if left > budget {
            let message = format!("{left} actions left, at most {budget} per turn");
            return Err(CoreError::InvalidState(message));
        }

        let target = self.config.goals_to_win;
        let (a, b) = (state.score.a, state.score.b);
        match state.winner {
            None if a >= target || b >= target => {
                let message = format!("score {a}-{b} already decides the game");
                Err(CoreError::InvalidState(message))
            }
            Some(side) if state.score.get(side) < target => {
                let message = format!("side {side} won without reaching {target} goals");
                Err(CoreError::InvalidState(message))
            }
            _ => Ok(()),
        }
    }

    /// Apply a move, returning the next snapshot, or `state` unchanged when
    /// the move is rejected.
    pub fn apply_move(
        &self,
        state: &GameState,
        piece_id: &str,
        destination: Position,
    ) -> GameState {
        self.play_move(state, piece_id, destination).state
    }

    /// Like [`RuleEngine::apply_move`] but also reports why a move was
    /// rejected, or which steal/goal it caused.
    pub fn play_move(
        &self,
        state: &GameState,
        piece_id: &str,
        destination: Position,
    ) -> MoveOutcome {
        match self.try_move(state, piece_id, destination) {
            Ok((next, report)) => MoveOutcome {
                state: next,
                result: MoveResult::Accepted(report),
            },
            Err(reason) => {
                log::debug!("rejected {piece_id} -> {destination}: {reason}");
                MoveOutcome {
                    state: state.clone(),
                    result: MoveResult::Rejected { reason },
                }
            }
        }
    }

    fn try_move(
        &self,
        state: &GameState,
        piece_id: &str,
        destination: Position,
    ) -> Result<(GameState, MoveReport), MoveRejection> {
        if state.is_finished() {
            return Err(MoveRejection::GameOver);
        }
        let piece = state
            .board
            .piece(piece_id)
            .ok_or(MoveRejection::UnknownPiece)?;
        validate_move(&state.board, piece, destination, state.current_player)?;

        let mut board = state.board.with_piece_moved(piece_id, destination);
        let mut report = MoveReport::default();

        if piece.is_player() {
            let held_ball = state
                .board
                .ball()
                .is_some_and(|ball| ball.position == piece.position);
            if held_ball {
                board = board.with_ball_at(destination);
            } else if let Some(method) =
                check_steal(&state.board, piece, destination, state.current_player)
            {
                report.steal = Some(method);
                board = board.with_ball_at(destination);
            }
        }

        let mut next = state.clone();
        next.board = board;
        next.actions_left = next.actions_left.saturating_sub(1);

        if next.actions_left == 0 {
            report.turn_ended = true;
            self.end_turn(&mut next, &mut report);
        }

        Ok((next, report))
    }

    fn end_turn(&self, state: &mut GameState, report: &mut MoveReport) {
        // Row 0 credits A, the far row credits B
        let goal = state
            .board
            .ball()
            .map(|ball| ball.position)
            .filter(|&cell| is_goal_area(cell))
            .map(|cell| if cell.y == 0 { Side::A } else { Side::B });

        if let Some(side) = goal {
            state.score.credit(side);
            report.goal = Some(side);
            let (a, b) = (state.score.a, state.score.b);
            log::info!("goal for side {side}, score {a}-{b}");

            let winner = if a >= self.config.goals_to_win {
                Some(Side::A)
            } else if b >= self.config.goals_to_win {
                Some(Side::B)
            } else {
                None
            };

            if let Some(winner) = winner {
                state.status = GameStatus::Finished;
                state.winner = Some(winner);
                report.winner = Some(winner);
                log::info!("side {winner} wins {a}-{b}");
                return;
            }

            log::info!("board reset to kick-off layout");
            state.board = Board::initial();
        }

        state.current_player = state.current_player.opponent();
        state.actions_left = self.config.actions_per_turn;
    }
}

/// Apply a move under the default rules; see [`RuleEngine::apply_move`].
pub fn apply_move(state: &GameState, piece_id: &str, destination: Position) -> GameState {
    RuleEngine::default()
        .apply_move(state, piece_id, destination)
}

/// Apply a move under the default rules; see [`RuleEngine::play_move`].
pub fn play_move(state: &GameState, piece_id: &str, destination: Position) -> MoveOutcome {
    RuleEngine::default()
        .play_move(state, piece_id, destination)
}
