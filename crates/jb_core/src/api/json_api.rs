use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::engine::{MoveResult, RuleEngine};
use crate::error::CoreError;
use crate::models::{GameState, Position, Side, BOARD_HEIGHT, BOARD_WIDTH};
use crate::rules::{legal_destinations, MoveRejection, StealMethod};
use crate::SCHEMA_VERSION;

#[derive(Debug, Serialize)]
pub struct NewGameResponse {
    pub schema_version: u8,
    pub board_width: i32,
    pub board_height: i32,
    pub state: GameState,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub schema_version: u8,
    pub state: GameState,
    pub piece_id: String,
    pub to: Position,
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub schema_version: u8,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<MoveRejection>,
    /// Human-readable rejection text for UI messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steal: Option<StealMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
    pub turn_ended: bool,
    pub state: GameState,
}

#[derive(Debug, Deserialize)]
pub struct DestinationsRequest {
    pub schema_version: u8,
    pub state: GameState,
    pub piece_id: String,
}

#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub schema_version: u8,
    pub piece_id: String,
    pub destinations: Vec<Position>,
}

fn check_schema(found: u8) -> Result<(), String> {
    if found != SCHEMA_VERSION {
        let err = CoreError::UnsupportedSchema {
            found,
            expected: SCHEMA_VERSION,
        };
        return Err(err.to_string());
    }
    Ok(())
}

fn engine_from_env() -> Result<RuleEngine, String> {
    RulesConfig::from_env()
        .map(RuleEngine::new)
        .map_err(|e| format!("Failed to load rules: {e}"))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value)
        .map_err(|e| format!("Failed to serialize response: {}", CoreError::from(e)))
}

/// Kick-off state for a new match.
pub fn new_game_json() -> Result<String, String> {
    let engine = engine_from_env()?;
    to_json(&NewGameResponse {
        schema_version: SCHEMA_VERSION,
        board_width: BOARD_WIDTH,
        board_height: BOARD_HEIGHT,
        state: engine.new_game(),
    })
}

/// Apply one move. Rejected moves are a successful response with
/// `accepted: false` and the unchanged state; only malformed requests are
/// errors.
pub fn apply_move_json(request_json: &str) -> Result<String, String> {
    let request: MoveRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid JSON request: {}", CoreError::from(e)))?;
    check_schema(request.schema_version)?;

    let engine = engine_from_env()?;
    engine
        .check_state(&request.state)
        .map_err(|e| e.to_string())?;
    let outcome = engine.play_move(&request.state, &request.piece_id, request.to);

    let mut response = MoveResponse {
        schema_version: SCHEMA_VERSION,
        accepted: false,
        rejection: None,
        message: None,
        steal: None,
        goal: None,
        winner: None,
        turn_ended: false,
        state: outcome.state,
    };
    match outcome.result {
        MoveResult::Accepted(report) => {
            response.accepted = true;
            response.steal = report.steal;
            response.goal = report.goal;
            response.winner = report.winner;
            response.turn_ended = report.turn_ended;
        }
        MoveResult::Rejected { reason } => {
            response.rejection = Some(reason);
            response.message = Some(reason.to_string());
        }
    }

    to_json(&response)
}

/// Cells the given piece may legally move to, for highlighting.
pub fn legal_destinations_json(request_json: &str) -> Result<String, String> {
    let request: DestinationsRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid JSON request: {}", CoreError::from(e)))?;
    check_schema(request.schema_version)?;

    let destinations = legal_destinations(&request.state, &request.piece_id);
    to_json(&DestinationsResponse {
        schema_version: SCHEMA_VERSION,
        piece_id: request.piece_id,
        destinations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::create_initial_state;
    use serde_json::{json, Value};

    fn move_request(piece_id: &str, x: i32, y: i32) -> String {
        json!({
            "schema_version": 1,
            "state": create_initial_state(),
            "piece_id": piece_id,
            "to": { "x": x, "y": y }
        })
        .to_string()
    }

    #[test]
    fn test_new_game_json() {
        let parsed: Value = serde_json::from_str(&new_game_json().unwrap()).unwrap();
        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["board_width"], 7);
        assert_eq!(parsed["board_height"], 9);
        let pieces = parsed["state"]["board"]["pieces"].as_array().map(Vec::len);
        assert_eq!(pieces, Some(13));
    }

    #[test]
    fn test_apply_move_json_accepted() {
        let response = apply_move_json(&move_request("A-5", 3, 5)).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["accepted"], true);
        assert_eq!(parsed["state"]["actions_left"], 1);
        assert!(parsed.get("rejection").is_none());
    }

    #[test]
    fn test_apply_move_json_rejected() {
        let response = apply_move_json(&move_request("A-5", 3, 3)).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["accepted"], false);
        assert_eq!(parsed["rejection"], "no_jump_path");
        assert_eq!(parsed["message"], "no jump path");
        assert_eq!(parsed["state"]["actions_left"], 2);
    }

    #[test]
    fn test_bad_requests_are_errors() {
        let err = apply_move_json("{").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"), "{err}");

        let wrong_schema = move_request("A-5", 3, 5)
            .replace("\"schema_version\":1", "\"schema_version\":9");
        let err = apply_move_json(&wrong_schema).unwrap_err();
        assert!(err.contains("Unsupported schema version"), "{err}");
    }

    #[test]
    fn test_apply_move_json_rejects_impossible_state() {
        let mut state = create_initial_state();
        state.score.a = u32::MAX;
        let request = json!({
            "schema_version": 1,
            "state": state,
            "piece_id": "A-5",
            "to": { "x": 3, "y": 5 }
        });

        let err = apply_move_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("Invalid game state"), "{err}");
    }

    #[test]
    fn test_apply_move_json_rejects_finished_game_without_winner() {
        let mut state = serde_json::to_value(create_initial_state()).unwrap();
        state["status"] = "finished".into();
        let request = json!({
            "schema_version": 1,
            "state": state,
            "piece_id": "A-5",
            "to": { "x": 3, "y": 5 }
        });

        let err = apply_move_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with("Invalid JSON request"), "{err}");
        assert!(err.contains("without a winner"), "{err}");
    }

    #[test]
    fn test_legal_destinations_json() {
        let request = json!({
            "schema_version": 1,
            "state": create_initial_state(),
            "piece_id": "A-5"
        });
        let response = legal_destinations_json(&request.to_string()).unwrap();
        let parsed: Value = serde_json::from_str(&response).unwrap();

        let cells = parsed["destinations"].as_array().unwrap();
        assert!(cells.contains(&json!({ "x": 3, "y": 5 })));
        assert!(!cells.contains(&json!({ "x": 3, "y": 7 })));
    }
}
