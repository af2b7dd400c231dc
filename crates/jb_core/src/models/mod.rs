pub mod board;
pub mod game_state;
pub mod piece;
pub mod position;

pub use board::{
    in_bounds, is_goal_area, is_keeper_area, Board, BOARD_HEIGHT, BOARD_WIDTH, CENTER_SPOT,
    SQUAD_SIZE,
};
pub use game_state::{
    create_initial_state, GameState, GameStatus, Score, ACTIONS_PER_TURN, GOALS_TO_WIN,
};
pub use piece::{Piece, PieceKind, Side, BALL_ID};
pub use position::{Position, DIRECTIONS};
