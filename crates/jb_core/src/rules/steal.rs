//! Ball-steal detection
//!
//! Possession only changes hands when an opponent holds the ball. Two ways to
//! take it:
//!
//! - **Jump**: the mover's chain leaps over the ball's cell.
//! - **Sandwich**: after the move, the ball sits strictly between the mover
//!   and another friendly player on a shared row, column or exact diagonal.
//!
//! Jump is checked first and wins when both apply.

use serde::{Deserialize, Serialize};

use super::jump::{jump_path, jumped_over_cells};
use crate::models::{Board, Piece, Position, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StealMethod {
    Jump,
    Sandwich,
}

/// Whether moving `mover` to `destination` takes the ball from the opponent.
///
/// Evaluated on the pre-move board. Callers skip this when the mover already
/// holds the ball.
pub fn check_steal(
    board: &Board,
    mover: &Piece,
    destination: Position,
    current_player: Side,
) -> Option<StealMethod> {
    let ball = board.ball()?;
    let holder = board.ball_holder()?;
    if holder.belongs_to(current_player) {
        return None;
    }

    let path = jump_path(board, mover.position, destination);
    let leapt = jumped_over_cells(mover.position, &path);
    if leapt.contains(&ball.position) {
        log::debug!("{} jumps over {} and takes the ball", mover.id, holder.id);
        return Some(StealMethod::Jump);
    }

    let sandwiched = board
        .players(current_player)
        .filter(|p| p.id != mover.id)
        .any(|friend| is_between(ball.position, destination, friend.position));
    if sandwiched {
        log::debug!("{} sandwiches the ball away from {}", mover.id, holder.id);
        return Some(StealMethod::Sandwich);
    }

    None
}

/// True when `target` lies strictly inside the segment `a`-`b` and the
/// segment runs along a row, a column or an exact diagonal.
fn is_between(target: Position, a: Position, b: Position) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (tx, ty) = (target.x - a.x, target.y - a.y);

    let aligned = dx == 0 || dy == 0 || dx.abs() == dy.abs();
    if !aligned || (dx == 0 && dy == 0) {
        return false;
    }
    // Collinear with the segment
    if tx * dy != ty * dx {
        return false;
    }

    // Progress along the dominant axis must be strictly inside (0, len)
    let (progress, len) = if dx != 0 {
        (tx * dx.signum(), dx.abs())
    } else {
        (ty * dy.signum(), dy.abs())
    };
    progress > 0 && progress < len
}
