pub mod json_api;

pub use json_api::{
    apply_move_json, legal_destinations_json, new_game_json, DestinationsRequest,
    DestinationsResponse, MoveRequest, MoveResponse, NewGameResponse,
};
