//! # Rule engine
//!
//! Applies moves to immutable [`GameState`](crate::models::GameState)
//! snapshots.
//!
//! ```rust
//! use jb_core::engine::{apply_move, RuleEngine};
//! use jb_core::config::RulesConfig;
//! use jb_core::models::{create_initial_state, Position};
//!
//! let state = create_initial_state();
//! let next = apply_move(&state, "A-5", Position::new(3, 5));
//! assert_eq!(next.actions_left, 1);
//!
//! let engine = RuleEngine::new(RulesConfig::sudden_death());
//! let outcome = engine.play_move(&engine.new_game(), "A-5", Position::new(9, 9));
//! assert!(!outcome.is_accepted());
//! ```

mod outcome;
mod turn;

#[cfg(test)]
mod proptests;

pub use outcome::{MoveOutcome, MoveReport, MoveResult};
pub use turn::{apply_move, play_move, RuleEngine};
