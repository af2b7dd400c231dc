use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::jump::jump_path;
use crate::models::{in_bounds, Board, Piece, PieceKind, Position, Side};

/// Why a move was refused. Display text is suitable for UI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveRejection {
    #[error("unknown piece")]
    UnknownPiece,
    #[error("game is over")]
    GameOver,
    #[error("out of bounds")]
    OutOfBounds,
    #[error("not your piece")]
    NotYourPiece,
    #[error("occupied by a player")]
    OccupiedByPlayer,
    #[error("no jump path")]
    NoJumpPath,
    #[error("cannot pass to opponent")]
    PassToOpponent,
    #[error("too far")]
    TooFar,
}

/// Decide whether `piece` may move to `destination` this action.
///
/// Rules are checked in order and the first failure is returned. Nothing is
/// mutated.
pub fn validate_move(
    board: &Board,
    piece: &Piece,
    destination: Position,
    current_player: Side,
) -> Result<(), MoveRejection> {
    if !in_bounds(destination) {
        return Err(MoveRejection::OutOfBounds);
    }

    let distance = piece.position.chebyshev_distance(destination);

    match piece.kind {
        PieceKind::Player => {
            if piece.owner != Some(current_player) {
                return Err(MoveRejection::NotYourPiece);
            }
            if board.player_at(destination).is_some() {
                return Err(MoveRejection::OccupiedByPlayer);
            }
            if distance == 1 {
                return Ok(());
            }
            if jump_path(board, piece.position, destination).is_empty() {
                return Err(MoveRejection::NoJumpPath);
            }
            Ok(())
        }
        PieceKind::Ball => {
            let opponent = current_player.opponent();
            let receiver = board.player_at(destination);
            if receiver.is_some_and(|p| p.belongs_to(opponent)) {
                return Err(MoveRejection::PassToOpponent);
            }
            if distance > 1 {
                return Err(MoveRejection::TooFar);
            }
            Ok(())
        }
    }
}
