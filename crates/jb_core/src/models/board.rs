//! Board model and pure cell queries.
//!
//! The ball holder is never stored: it is whichever player piece shares the
//! ball's cell.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::piece::{Piece, Side};
use super::position::Position;
use crate::error::{CoreError, Result};

pub const BOARD_WIDTH: i32 = 7;
pub const BOARD_HEIGHT: i32 = 9;

/// Players per side on a regulation board.
pub const SQUAD_SIZE: usize = 6;

/// Ball kick-off cell (board centre).
pub const CENTER_SPOT: Position = Position::new(3, 4);

const SIDE_A_START: [Position; SQUAD_SIZE] = [
    Position::new(1, 7),
    Position::new(2, 7),
    Position::new(3, 7),
    Position::new(4, 7),
    Position::new(5, 7),
    Position::new(3, 6),
];

const SIDE_B_START: [Position; SQUAD_SIZE] = [
    Position::new(1, 1),
    Position::new(2, 1),
    Position::new(3, 1),
    Position::new(4, 1),
    Position::new(5, 1),
    Position::new(3, 2),
];

pub fn in_bounds(position: Position) -> bool {
    position.x >= 0 && position.x < BOARD_WIDTH && position.y >= 0 && position.y < BOARD_HEIGHT
}

/// The two end rows.
pub fn is_goal_area(position: Position) -> bool {
    position.y == 0 || position.y == BOARD_HEIGHT - 1
}

/// Rows adjacent to the goal rows.
pub fn is_keeper_area(position: Position) -> bool {
    position.y == 1 || position.y == BOARD_HEIGHT - 2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    pieces: Vec<Piece>,
}

#[derive(Serialize, Deserialize)]
struct RawBoard {
    pieces: Vec<Piece>,
}

impl TryFrom<RawBoard> for Board {
    type Error = CoreError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::from_pieces(raw.pieces)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> Self {
        RawBoard {
            pieces: board.pieces,
        }
    }
}

impl Board {
    /// Kick-off layout: side A on rows 6-7, side B on rows 1-2, ball centred.
    ///
    /// Piece order is `A-0..A-5`, `B-0..B-5`, `ball`.
    pub fn initial() -> Self {
        let mut pieces = Vec::with_capacity(SQUAD_SIZE * 2 + 1);
        for (side, layout) in [(Side::A, SIDE_A_START), (Side::B, SIDE_B_START)] {
            for (index, position) in layout.into_iter().enumerate() {
                let id = format!("{}-{}", side.id_prefix(), index);
                pieces.push(Piece::player(id, side, position));
            }
        }
        pieces.push(Piece::ball(CENTER_SPOT));
        Self { pieces }
    }

    /// Build a board from an arbitrary piece list.
    ///
    /// Checks the structural invariants (one ownerless ball, owned players,
    /// unique ids, everything in bounds, no stacked players). Squad size is
    /// not enforced so that partial scenario boards can be built; see
    /// [`Board::has_full_squads`].
    pub fn from_pieces(pieces: Vec<Piece>) -> Result<Self> {
        check_layout(&pieces)?;
        Ok(Self { pieces })
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Piece on a cell. When the ball shares the cell with its holder the
    /// holder is returned.
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.player_at(position)
            .or_else(|| self.ball().filter(|b| b.position == position))
    }

    pub fn player_at(&self, position: Position) -> Option<&Piece> {
        self.pieces
            .iter()
            .find(|p| p.is_player() && p.position == position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.pieces.iter().any(|p| p.position == position)
    }

    pub fn ball(&self) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_ball())
    }

    /// Player piece co-located with the ball, if any.
    pub fn ball_holder(&self) -> Option<&Piece> {
        let ball = self.ball()?;
        self.player_at(ball.position)
    }

    pub fn players(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.belongs_to(side))
    }

    pub fn has_full_squads(&self) -> bool {
        self.players(Side::A).count() == SQUAD_SIZE && self.players(Side::B).count() == SQUAD_SIZE
    }

    /// Copy of the board with one piece relocated. Unknown ids leave the copy
    /// unchanged.
    pub fn with_piece_moved(&self, id: &str, to: Position) -> Board {
        let mut next = self.clone();
        if let Some(piece) = next.pieces.iter_mut().find(|p| p.id == id) {
            piece.position = to;
        }
        next
    }

    /// Copy of the board with the ball relocated.
    pub fn with_ball_at(&self, to: Position) -> Board {
        let mut next = self.clone();
        if let Some(ball) = next.pieces.iter_mut().find(|p| p.is_ball()) {
            ball.position = to;
        }
        next
    }
}

fn check_layout(pieces: &[Piece]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut occupied = HashSet::new();
    let mut balls = 0;

    for piece in pieces {
        if !ids.insert(piece.id.as_str()) {
            let message = format!("duplicate piece id {}", piece.id);
            return Err(CoreError::InvalidBoard(message));
        }
        if !in_bounds(piece.position) {
            return Err(CoreError::InvalidBoard(format!(
                "piece {} is off the board at {}",
                piece.id, piece.position
            )));
        }
        if piece.is_ball() {
            balls += 1;
            if piece.owner.is_some() {
                return Err(CoreError::InvalidBoard("the ball cannot have an owner".into()));
            }
        } else {
            if piece.owner.is_none() {
                let message = format!("player piece {} has no owner", piece.id);
                return Err(CoreError::InvalidBoard(message));
            }
            if !occupied.insert(piece.position) {
                return Err(CoreError::InvalidBoard(format!(
                    "two player pieces share cell {}",
                    piece.position
                )));
            }
        }
    }

    if balls != 1 {
        let message = format!("expected exactly one ball, found {balls}");
        return Err(CoreError::InvalidBoard(message));
    }

    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.pieces().len(), 13);
        assert_eq!(board.players(Side::A).count(), 6);
        assert_eq!(board.players(Side::B).count(), 6);
        assert!(board.has_full_squads());
        let ball = board.ball().map(|b| b.position);
        assert_eq!(ball, Some(Position::new(3, 4)));
        assert_eq!(
            board.piece("A-5").map(|p| p.position),
            Some(Position::new(3, 6))
        );
        assert_eq!(
            board.piece("B-5").map(|p| p.position),
            Some(Position::new(3, 2))
        );
        assert!(board.ball_holder().is_none());
    }

    #[test]
    fn test_piece_at() {
        let board = Board::initial();
        let centre = board.piece_at(Position::new(3, 4));
        assert!(centre.is_some_and(|p| p.is_ball()));
        assert!(board.piece_at(Position::new(0, 0)).is_none());
        let corner = board.piece_at(Position::new(1, 7));
        assert_eq!(corner.map(|p| p.id.as_str()), Some("A-0"));
    }

    #[test]
    fn test_piece_at_prefers_holder() {
        let board = Board::from_pieces(vec![
            Piece::ball(Position::new(2, 2)),
            Piece::player("B-0", Side::B, Position::new(2, 2)),
        ])
        .unwrap();
        let shared = board.piece_at(Position::new(2, 2));
        assert_eq!(shared.map(|p| p.id.as_str()), Some("B-0"));
        assert_eq!(board.ball_holder().map(|p| p.id.as_str()), Some("B-0"));
    }

    #[test]
    fn test_bounds() {
        assert!(!in_bounds(Position::new(-1, 0)));
        assert!(!in_bounds(Position::new(0, -1)));
        assert!(!in_bounds(Position::new(7, 0)));
        assert!(!in_bounds(Position::new(0, 9)));
        assert!(in_bounds(Position::new(0, 0)));
        assert!(in_bounds(Position::new(6, 8)));
    }

    #[test]
    fn test_goal_and_keeper_rows() {
        assert!(is_goal_area(Position::new(3, 0)));
        assert!(is_goal_area(Position::new(3, 8)));
        assert!(!is_goal_area(Position::new(3, 1)));
        assert!(!is_goal_area(Position::new(3, 4)));

        assert!(is_keeper_area(Position::new(3, 1)));
        assert!(is_keeper_area(Position::new(3, 7)));
        assert!(!is_keeper_area(Position::new(3, 0)));
        assert!(!is_keeper_area(Position::new(3, 8)));
    }

    #[test]
    fn test_from_pieces_rejects_broken_layouts() {
        let no_ball = Board::from_pieces(vec![Piece::player("A-0", Side::A, Position::new(0, 0))]);
        assert!(matches!(no_ball, Err(CoreError::InvalidBoard(_))));

        let stacked = Board::from_pieces(vec![
            Piece::ball(Position::new(3, 4)),
            Piece::player("A-0", Side::A, Position::new(1, 1)),
            Piece::player("B-0", Side::B, Position::new(1, 1)),
        ]);
        assert!(stacked.is_err());

        let off_board = Board::from_pieces(vec![Piece::ball(Position::new(7, 4))]);
        assert!(off_board.is_err());

        let duplicate = Board::from_pieces(vec![
            Piece::ball(Position::new(3, 4)),
            Piece::player("A-0", Side::A, Position::new(1, 1)),
            Piece::player("A-0", Side::A, Position::new(2, 1)),
        ]);
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_with_piece_moved_leaves_original() {
        let board = Board::initial();
        let moved = board.with_piece_moved("A-5", Position::new(3, 5));
        assert_eq!(
            board.piece("A-5").map(|p| p.position),
            Some(Position::new(3, 6))
        );
        assert_eq!(
            moved.piece("A-5").map(|p| p.position),
            Some(Position::new(3, 5))
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"pieces":[
            {"id":"A-0","type":"player","owner":"A","position":{"x":0,"y":0}}
        ]}"#;
        assert!(serde_json::from_str::<Board>(json).is_err());

        let round = serde_json::to_string(&Board::initial()).unwrap();
        let parsed: Board = serde_json::from_str(&round).unwrap();
        assert_eq!(parsed, Board::initial());
    }
}
