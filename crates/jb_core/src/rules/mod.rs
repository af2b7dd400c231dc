//! Move legality, chained jumps and possession changes.

pub mod destinations;
pub mod jump;
pub mod steal;
pub mod validation;

pub use destinations::{legal_destinations, player_destinations};
pub use jump::{jump_path, jumped_over_cells, reachable_jump_landings, JumpLanding};
pub use steal::{check_steal, StealMethod};
pub use validation::{validate_move, MoveRejection};
