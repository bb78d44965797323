//! Property tests for board arithmetic, dice predicates and token movement.
//!
//! These check the invariants that must hold for every input, not just the
//! handful of cases the unit tests pin down.

use proptest::prelude::*;

use ludo_engine::board::{
    absolute_position, advance, finish_lane_index, is_finished, is_legal_move, FINISH_DISTANCE,
    MAIN_TRACK_DISTANCE, TRACK_LENGTH,
};
use ludo_engine::dice::{can_open_token, ends_turn_after_sixes, grants_extra_turn, is_valid_roll};
use ludo_engine::rules::{next_player, TurnState};
use ludo_engine::tokens::{can_move, initial_tokens, move_token};
use ludo_engine::{PlayerColor, Token};

fn any_player() -> impl Strategy<Value = PlayerColor> {
    (0usize..4).prop_map(PlayerColor::from_index)
}

// =============================================================================
// Board
// =============================================================================

proptest! {
    #[test]
    fn prop_advance_stays_on_track(position in 0u8..TRACK_LENGTH, roll in 1u8..=6) {
        let next = advance(position, roll);
        prop_assert!(next < TRACK_LENGTH);
        prop_assert_eq!(next, ((u16::from(position) + u16::from(roll)) % 72) as u8);
    }

    #[test]
    fn prop_legal_move_never_overshoots(distance in 0u8..=FINISH_DISTANCE, roll in 1u8..=6) {
        prop_assert_eq!(is_legal_move(distance, roll), distance + roll <= FINISH_DISTANCE);
    }

    #[test]
    fn prop_is_finished_only_at_58(distance in any::<u8>()) {
        prop_assert_eq!(is_finished(distance), distance == FINISH_DISTANCE);
    }

    #[test]
    fn prop_main_track_positions_are_cells(player in any_player(), distance in 0u8..MAIN_TRACK_DISTANCE) {
        let position = absolute_position(player, distance);
        prop_assert!(position.is_some_and(|p| p < TRACK_LENGTH));
        prop_assert_eq!(finish_lane_index(distance), None);
    }

    #[test]
    fn prop_finish_lane_leaves_track(player in any_player(), distance in MAIN_TRACK_DISTANCE..=FINISH_DISTANCE) {
        prop_assert_eq!(absolute_position(player, distance), None);
        prop_assert_eq!(finish_lane_index(distance), Some(distance - MAIN_TRACK_DISTANCE));
    }
}

// =============================================================================
// Dice
// =============================================================================

proptest! {
    #[test]
    fn prop_only_six_is_special(value in any::<u8>()) {
        prop_assert_eq!(grants_extra_turn(value), value == 6);
        prop_assert_eq!(can_open_token(value), value == 6);
    }

    #[test]
    fn prop_sixes_threshold(count in any::<u8>()) {
        prop_assert_eq!(ends_turn_after_sixes(count), count >= 3);
    }

    #[test]
    fn prop_fractional_rolls_invalid(value in 1.0f64..6.0) {
        prop_assume!(value.fract() != 0.0);
        prop_assert!(!is_valid_roll(value));
    }
}

// =============================================================================
// Tokens and turns
// =============================================================================

proptest! {
    #[test]
    fn prop_home_moves_only_on_six(player in any_player(), roll in 1u8..=6) {
        let token = Token::new(player, 0);
        prop_assert_eq!(can_move(&token, roll), roll == 6);
    }

    #[test]
    fn prop_move_never_mutates_input(player in any_player(), roll in 1u8..=6) {
        let tokens = initial_tokens(&[player]);
        let before = tokens.clone();

        let _ = move_token(&tokens[0], roll, &tokens);
        prop_assert_eq!(tokens, before);
    }

    #[test]
    fn prop_streak_never_exceeds_two(rolls in prop::collection::vec(1u8..=6, 0..40)) {
        let mut state = TurnState::new(PlayerColor::Red);
        for roll in rolls {
            state = state.process_roll(roll);
            prop_assert!(state.consecutive_sixes <= 2);
            prop_assert!(state.can_roll());
        }
    }

    #[test]
    fn prop_next_player_is_active_and_different(
        current in any_player(),
        mask in 1u8..16,
    ) {
        let active: Vec<PlayerColor> = PlayerColor::ALL
            .into_iter()
            .filter(|p| mask & (1 << p.index()) != 0)
            .collect();
        let next = next_player(current, &active);

        if active.iter().any(|&p| p != current) {
            prop_assert!(active.contains(&next));
            prop_assert_ne!(next, current);
        } else {
            prop_assert_eq!(next, current);
        }
    }
}
