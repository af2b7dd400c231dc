//! Grid coordinates
//!
//! - X: 0 = left edge, 6 = right edge (board width 7)
//! - Y: 0 = side B's goal row, 8 = side A's goal row (board height 9)
//!
//! Coordinates are signed so that malformed input (negative cells) can be
//! represented and rejected by the bounds check instead of wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a direction vector. No bounds check.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// max(|dx|, |dy|); 1 for each of the 8 neighbours.
    #[inline]
    pub fn chebyshev_distance(self, other: Position) -> i32 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }

    /// Unit step (each axis in -1..=1) pointing from `self` towards `other`.
    #[inline]
    pub fn step_towards(self, other: Position) -> (i32, i32) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 8 compass/diagonal directions in search order.
///
/// Jump discovery iterates in exactly this order, which fixes which of two
/// equally short chains is reported.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
