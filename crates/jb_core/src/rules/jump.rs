//! Chained-jump pathfinder
//!
//! A player piece may leap over any occupied neighbouring cell onto the cell
//! directly beyond it, and keep leaping from each landing within the same
//! action. Discovery is breadth-first with an explicit visited set, so each
//! landing is reported once with a shortest chain, and the chain for a given
//! board is always the same.
//!
//! The searched board is the pre-move board: the mover still stands on its
//! origin cell, which may itself be leapt over on a later hop.

use std::collections::{HashSet, VecDeque};

use crate::models::{in_bounds, Board, Position, DIRECTIONS};

/// A cell reachable by chained jumps and the landings taken to reach it
/// (the last entry is `position` itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpLanding {
    pub position: Position,
    pub path: Vec<Position>,
}

/// Every cell reachable from `origin` by one or more chained jumps, in
/// discovery order.
pub fn reachable_jump_landings(board: &Board, origin: Position) -> Vec<JumpLanding> {
    let mut visited = HashSet::from([origin]);
    let mut frontier: VecDeque<(Position, Vec<Position>)> = VecDeque::from([(origin, Vec::new())]);
    let mut landings = Vec::new();

    while let Some((position, path)) = frontier.pop_front() {
        for (dx, dy) in DIRECTIONS {
            let over = position.offset(dx, dy);
            if !in_bounds(over) || !board.is_occupied(over) {
                continue;
            }

            // A lone ball on the landing is fine; another player is not
            let landing = over.offset(dx, dy);
            let blocked = visited.contains(&landing) || board.player_at(landing).is_some();
            if !in_bounds(landing) || blocked {
                continue;
            }

            visited.insert(landing);
            let mut chain = path.clone();
            chain.push(landing);
            landings.push(JumpLanding {
                position: landing,
                path: chain.clone(),
            });
            frontier.push_back((landing, chain));
        }
    }

    landings
}

/// Landings leading from `origin` to `destination`, or an empty path when no
/// chain of jumps gets there.
pub fn jump_path(board: &Board, origin: Position, destination: Position) -> Vec<Position> {
    reachable_jump_landings(board, origin)
        .into_iter()
        .find(|landing| landing.position == destination)
        .map(|landing| landing.path)
        .unwrap_or_default()
}

/// Cells leapt over along a path: the midpoint of each hop.
pub fn jumped_over_cells(origin: Position, path: &[Position]) -> Vec<Position> {
    let mut current = origin;
    path.iter()
        .map(|&next| {
            let (sx, sy) = current.step_towards(next);
            let over = current.offset(sx, sy);
            current = next;
            over
        })
        .collect()
}
