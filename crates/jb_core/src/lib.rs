//! # jb_core - Jumpball rule engine
//!
//! Deterministic rules for Jumpball, a two-player game on a 7x9 grid where
//! each side has six players and both sides fight over a single ball.
//!
//! ## Features
//! - Immutable snapshots: every move returns a new [`GameState`]
//! - Chained jumps found by breadth-first search
//! - Ball steals by jumping over the holder or sandwiching the ball
//! - JSON API for presentation layers
//!
//! Rejected moves never panic or error; the input state is returned as-is.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;

pub use api::{apply_move_json, legal_destinations_json, new_game_json};
pub use config::RulesConfig;
pub use engine::{apply_move, play_move, MoveOutcome, MoveReport, MoveResult, RuleEngine};
pub use error::{CoreError, Result};
pub use models::{
    create_initial_state, in_bounds, is_goal_area, is_keeper_area, Board, GameState, GameStatus,
    Piece, PieceKind, Position, Score, Side, BOARD_HEIGHT, BOARD_WIDTH,
};
pub use rules::{
    check_steal, jump_path, legal_destinations, player_destinations, reachable_jump_landings,
    validate_move, MoveRejection, StealMethod,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
