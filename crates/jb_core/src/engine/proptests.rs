//! Property tests: random play never breaks board invariants.

use proptest::prelude::*;

use super::turn::{apply_move, play_move, RuleEngine};
use crate::models::{
    create_initial_state, Board, GameState, Position, BALL_ID, BOARD_HEIGHT, BOARD_WIDTH,
};
use crate::rules::legal_destinations;

fn assert_invariants(state: &GameState) -> Result<(), TestCaseError> {
    let pieces = state.board.pieces().to_vec();
    prop_assert!(
        Board::from_pieces(pieces).is_ok(),
        "broken layout: {:?}",
        state.board
    );
    prop_assert!(state.board.has_full_squads());
    prop_assert!(RuleEngine::default().check_state(state).is_ok());
    prop_assert!(state.score.a <= 2 && state.score.b <= 2);
    if state.is_finished() {
        prop_assert!(state.winner.is_some());
    } else {
        prop_assert!((1..=2).contains(&state.actions_left));
        prop_assert!(state.winner.is_none());
    }
    Ok(())
}

/// Pick among the mover's own pieces plus the ball.
fn movable_ids(state: &GameState) -> Vec<String> {
    let mut ids: Vec<String> = state
        .board
        .players(state.current_player)
        .map(|p| p.id.clone())
        .collect();
    ids.push(BALL_ID.to_string());
    ids
}

proptest! {
    /// Property: legal play keeps exactly one ball, full squads and no stacking
    #[test]
    fn prop_legal_play_preserves_invariants(
        picks in prop::collection::vec((0usize..7, 0usize..64), 1..80)
    ) {
        let mut state = create_initial_state();
        for (piece_pick, dest_pick) in picks {
            if state.is_finished() {
                break;
            }
            let ids = movable_ids(&state);
            let id = &ids[piece_pick % ids.len()];
            let destinations = legal_destinations(&state, id);
            if destinations.is_empty() {
                continue;
            }
            let to = destinations[dest_pick % destinations.len()];

            let outcome = play_move(&state, id, to);
            prop_assert!(outcome.is_accepted(), "{} -> {} was highlighted but rejected", id, to);
            state = outcome.state;
            assert_invariants(&state)?;
        }
    }

    /// Property: arbitrary (often illegal) input either is rejected with the
    /// state untouched or consumes exactly one action
    #[test]
    fn prop_arbitrary_moves_are_noop_or_one_action(
        moves in prop::collection::vec(
            (0usize..13, -2i32..BOARD_WIDTH + 2, -2i32..BOARD_HEIGHT + 2),
            1..60,
        )
    ) {
        let mut state = create_initial_state();
        for (index, x, y) in moves {
            let id = state.board.pieces()[index].id.clone();
            let next = apply_move(&state, &id, Position::new(x, y));

            if next == state {
                prop_assert_eq!(next.actions_left, state.actions_left);
            } else if next.current_player == state.current_player && !next.is_finished() {
                prop_assert_eq!(next.actions_left + 1, state.actions_left);
            }
            state = next;
            assert_invariants(&state)?;
        }
    }
}
