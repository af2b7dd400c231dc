use serde::{Deserialize, Serialize};
use std::fmt;

use super::position::Position;

/// Id of the single ball piece.
pub const BALL_ID: &str = "ball";

/// One of the two competing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Prefix used in player piece ids ("A-0", "B-5", ...).
    pub fn id_prefix(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id_prefix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Player,
    Ball,
}

/// A piece on the board.
///
/// `owner` is set for player pieces only. Use the constructors rather than a
/// struct literal so that pairing stays consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PieceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Side>,
    pub position: Position,
}

impl Piece {
    pub fn player(id: impl Into<String>, owner: Side, position: Position) -> Self {
        Self {
            id: id.into(),
            kind: PieceKind::Player,
            owner: Some(owner),
            position,
        }
    }

    pub fn ball(position: Position) -> Self {
        Self {
            id: BALL_ID.to_string(),
            kind: PieceKind::Ball,
            owner: None,
            position,
        }
    }

    pub fn is_player(&self) -> bool {
        self.kind == PieceKind::Player
    }

    pub fn is_ball(&self) -> bool {
        self.kind == PieceKind::Ball
    }

    /// True for a player piece owned by `side`.
    pub fn belongs_to(&self, side: Side) -> bool {
        self.is_player() && self.owner == Some(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }

    #[test]
    fn test_ball_belongs_to_nobody() {
        let ball = Piece::ball(Position::new(3, 4));
        assert!(ball.is_ball());
        assert!(!ball.belongs_to(Side::A));
        assert!(!ball.belongs_to(Side::B));
    }

    #[test]
    fn test_piece_json_fields() {
        let piece = Piece::player("A-0", Side::A, Position::new(1, 7));
        let value = serde_json::to_value(&piece).unwrap();
        assert_eq!(value["type"], "player");
        assert_eq!(value["owner"], "A");

        let ball = serde_json::to_value(Piece::ball(Position::new(3, 4))).unwrap();
        assert_eq!(ball["type"], "ball");
        assert!(ball.get("owner").is_none());
    }
}
