//! Destination enumeration for move highlighting.

use super::jump::reachable_jump_landings;
use super::validation::validate_move;
use crate::models::{in_bounds, Board, GameState, Piece, PieceKind, Position, DIRECTIONS};

/// Cells a player piece could reach: free or ball-only neighbours, then every
/// chain-jump landing. Ownership is not checked here.
pub fn player_destinations(board: &Board, piece: &Piece) -> Vec<Position> {
    let mut cells: Vec<Position> = neighbours(piece.position)
        .filter(|&cell| board.player_at(cell).is_none())
        .collect();

    for landing in reachable_jump_landings(board, piece.position) {
        if !cells.contains(&landing.position) {
            cells.push(landing.position);
        }
    }
    cells
}

/// Destinations the validator accepts for `piece_id` in `state`.
///
/// Candidates come from [`player_destinations`] or the ball's neighbours and
/// are filtered through [`validate_move`], so a highlighted cell is always a
/// legal move. Empty for unknown pieces and finished games.
pub fn legal_destinations(state: &GameState, piece_id: &str) -> Vec<Position> {
    if state.is_finished() {
        return Vec::new();
    }
    let Some(piece) = state.board.piece(piece_id) else {
        return Vec::new();
    };

    let candidates = match piece.kind {
        PieceKind::Player => player_destinations(&state.board, piece),
        PieceKind::Ball => neighbours(piece.position).collect(),
    };

    let side = state.current_player;
    candidates
        .into_iter()
        .filter(|&cell| validate_move(&state.board, piece, cell, side).is_ok())
        .collect()
}

fn neighbours(origin: Position) -> impl Iterator<Item = Position> {
    DIRECTIONS
        .into_iter()
        .map(move |(dx, dy)| origin.offset(dx, dy))
        .filter(|&cell| in_bounds(cell))
}
