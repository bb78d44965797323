//! Win detection and standings.
//!
//! Standings are derived from the token list on demand; nothing here is
//! stored between moves.

use serde::{Deserialize, Serialize};

use crate::board::{FINISH_DISTANCE, TOKENS_PER_PLAYER};
use crate::core::PlayerColor;
use crate::tokens::{count_finished, Token};

/// One player's standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerColor,

    /// 1-based place. Players with equal finished counts share a place.
    /// Zero until assigned by [`compute_win_state`].
    pub rank: u8,

    /// Tokens that have completed the course.
    pub finished_count: u8,

    /// All four tokens finished.
    pub has_won: bool,
}

/// Standings for the whole table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinState {
    /// Some player has finished every token.
    pub is_game_over: bool,

    /// Highest-ranked player who has finished every token.
    pub winner: Option<PlayerColor>,

    /// Active players, best first.
    pub rankings: Vec<PlayerResult>,
}

impl WinState {
    /// Standing for one player, if they are in the rankings.
    #[must_use]
    pub fn result_for(&self, player: PlayerColor) -> Option<&PlayerResult> {
        self.rankings.iter().find(|r| r.player == player)
    }

    /// Check if a player has finished every token.
    #[must_use]
    pub fn is_winner(&self, player: PlayerColor) -> bool {
        self.result_for(player).is_some_and(|r| r.has_won)
    }
}

/// True iff every one of the player's four tokens is finished.
#[must_use]
pub fn has_won(player_tokens: &[Token]) -> bool {
    count_finished(player_tokens) == TOKENS_PER_PLAYER
}

/// Standing for `player` over the full token list, with rank unassigned.
#[must_use]
pub fn compute_result(player: PlayerColor, all_tokens: &[Token]) -> PlayerResult {
    let finished_count = all_tokens
        .iter()
        .filter(|t| t.player() == player && t.is_finished())
        .count();

    PlayerResult {
        player,
        rank: 0,
        finished_count: finished_count as u8,
        has_won: finished_count == TOKENS_PER_PLAYER,
    }
}

/// Rank every active player by finished tokens.
///
/// Sorting is stable, so tied players keep their seat order. A tied group
/// takes the place of its first member, and the next group's place counts
/// everyone above it (1, 1, 3, ...).
#[must_use]
pub fn compute_win_state(all_tokens: &[Token], active_players: &[PlayerColor]) -> WinState {
    let mut rankings: Vec<PlayerResult> = active_players
        .iter()
        .map(|&player| compute_result(player, all_tokens))
        .collect();
    rankings.sort_by(|a, b| b.finished_count.cmp(&a.finished_count));

    let mut rank = 1;
    for i in 0..rankings.len() {
        if i > 0 && rankings[i].finished_count < rankings[i - 1].finished_count {
            rank = i as u8 + 1;
        }
        rankings[i].rank = rank;
    }

    let winner = rankings.iter().find(|r| r.has_won).map(|r| r.player);

    WinState {
        is_game_over: winner.is_some(),
        winner,
        rankings,
    }
}

/// Whether play should go on.
///
/// Before anyone wins, always. Afterwards, only when `continue_after_winner`
/// is set and at least two players are still racing for a place.
#[must_use]
pub fn should_continue(win_state: &WinState, continue_after_winner: bool) -> bool {
    if win_state.winner.is_none() {
        return true;
    }
    if !continue_after_winner {
        return false;
    }
    win_state.rankings.iter().filter(|r| !r.has_won).count() > 1
}

/// Players ordered by place, best first.
#[must_use]
pub fn winners_in_order(win_state: &WinState) -> Vec<PlayerColor> {
    let mut ordered = win_state.rankings.clone();
    ordered.sort_by_key(|r| r.rank);
    ordered.into_iter().map(|r| r.player).collect()
}

/// True if this roll finishes the player's last token.
///
/// Requires three finished tokens and the fourth on the board exactly
/// `roll` cells from the end.
#[must_use]
pub fn can_win_this_turn(player_tokens: &[Token], roll: u8) -> bool {
    if count_finished(player_tokens) != TOKENS_PER_PLAYER - 1 {
        return false;
    }

    player_tokens
        .iter()
        .find(|t| t.is_active())
        .is_some_and(|t| FINISH_DISTANCE - t.distance == roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenStatus;
    use crate::core::PlayerColor::*;

    fn finished(player: PlayerColor, index: u8) -> Token {
        Token {
            status: TokenStatus::Finished,
            distance: FINISH_DISTANCE,
            ..Token::new(player, index)
        }
    }

    fn active(player: PlayerColor, index: u8, distance: u8) -> Token {
        Token {
            status: TokenStatus::Active,
            distance,
            position: crate::board::absolute_position(player, distance),
            ..Token::new(player, index)
        }
    }

    /// Four tokens for `player`, the first `done` of them finished.
    fn tokens_with_finished(player: PlayerColor, done: u8) -> Vec<Token> {
        (0..4)
            .map(|i| if i < done { finished(player, i) } else { Token::new(player, i) })
            .collect()
    }

    #[test]
    fn test_has_won() {
        assert!(has_won(&tokens_with_finished(Red, 4)));
        assert!(!has_won(&tokens_with_finished(Red, 3)));
        assert!(!has_won(&[]));
    }

    #[test]
    fn test_compute_result() {
        let mut tokens = tokens_with_finished(Red, 4);
        tokens.extend(tokens_with_finished(Blue, 1));

        let red = compute_result(Red, &tokens);
        assert_eq!(red.finished_count, 4);
        assert!(red.has_won);

        let blue = compute_result(Blue, &tokens);
        assert_eq!(blue.finished_count, 1);
        assert!(!blue.has_won);
    }

    #[test]
    fn test_rankings_order() {
        let mut tokens = tokens_with_finished(Red, 1);
        tokens.extend(tokens_with_finished(Blue, 3));
        tokens.extend(tokens_with_finished(Green, 2));

        let state = compute_win_state(&tokens, &[Red, Blue, Green]);

        let order: Vec<_> = state.rankings.iter().map(|r| (r.player, r.rank)).collect();
        assert_eq!(order, vec![(Blue, 1), (Green, 2), (Red, 3)]);
        assert!(!state.is_game_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_ties_share_rank() {
        let mut tokens = tokens_with_finished(Red, 2);
        tokens.extend(tokens_with_finished(Blue, 2));
        tokens.extend(tokens_with_finished(Green, 1));
        tokens.extend(tokens_with_finished(Yellow, 0));

        let state = compute_win_state(&tokens, &[Red, Blue, Green, Yellow]);
        let ranks: Vec<_> = state.rankings.iter().map(|r| (r.player, r.rank)).collect();

        assert_eq!(ranks, vec![(Red, 1), (Blue, 1), (Green, 3), (Yellow, 4)]);
    }

    #[test]
    fn test_all_tied_at_start() {
        let tokens = crate::tokens::initial_tokens(&[Red, Blue, Green]);
        let state = compute_win_state(&tokens, &[Red, Blue, Green]);

        assert!(state.rankings.iter().all(|r| r.rank == 1));
    }

    #[test]
    fn test_winner_detected() {
        let mut tokens = tokens_with_finished(Red, 2);
        tokens.extend(tokens_with_finished(Blue, 4));

        let state = compute_win_state(&tokens, &[Red, Blue]);

        assert!(state.is_game_over);
        assert_eq!(state.winner, Some(Blue));
        assert!(state.is_winner(Blue));
        assert!(!state.is_winner(Red));
        assert_eq!(state.result_for(Blue).map(|r| r.rank), Some(1));
    }

    #[test]
    fn test_should_continue() {
        let mut tokens = tokens_with_finished(Red, 4);
        tokens.extend(tokens_with_finished(Blue, 1));
        tokens.extend(tokens_with_finished(Green, 0));

        let three = compute_win_state(&tokens, &[Red, Blue, Green]);
        assert!(should_continue(&three, true));
        assert!(!should_continue(&three, false));

        let two = compute_win_state(&tokens, &[Red, Blue]);
        assert!(!should_continue(&two, true));

        let none = compute_win_state(&tokens, &[Blue, Green]);
        assert!(should_continue(&none, false));
    }

    #[test]
    fn test_winners_in_order() {
        let mut tokens = tokens_with_finished(Red, 0);
        tokens.extend(tokens_with_finished(Blue, 4));
        tokens.extend(tokens_with_finished(Green, 2));

        let state = compute_win_state(&tokens, &[Red, Blue, Green]);
        assert_eq!(winners_in_order(&state), vec![Blue, Green, Red]);
    }

    #[test]
    fn test_can_win_this_turn() {
        let mut tokens = tokens_with_finished(Red, 3);
        tokens[3] = active(Red, 3, 54);

        assert!(can_win_this_turn(&tokens, 4));
        assert!(!can_win_this_turn(&tokens, 3));
        assert!(!can_win_this_turn(&tokens, 5));
    }

    #[test]
    fn test_cannot_win_with_token_home_or_too_few_finished() {
        let home = tokens_with_finished(Red, 3);
        assert!(!can_win_this_turn(&home, 6));

        let mut two_done = tokens_with_finished(Red, 2);
        two_done[2] = active(Red, 2, 57);
        two_done[3] = active(Red, 3, 57);
        assert!(!can_win_this_turn(&two_done, 1));
    }

    #[test]
    fn test_win_state_serialization() {
        let tokens = tokens_with_finished(Red, 4);
        let state = compute_win_state(&tokens, &[Red]);

        let json = serde_json::to_string(&state).unwrap();
        let back: WinState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
