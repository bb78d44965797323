//! A complete game: tokens, turn, standings and the roll waiting to be used.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::ai::select_move;
use crate::board::TOKENS_PER_PLAYER;
use crate::core::{GameConfig, GameMode, GameRng, PlayerColor, PlayerMap, RulesError};
use crate::dice::{self, ends_turn_after_sixes, grants_extra_turn, validate_roll};
use crate::rules::{compute_win_state, should_continue, winners_in_order, TurnState, WinState};
use crate::tokens::{self, apply_outcome, initial_tokens, moveable_tokens, Token, TokenId};

/// A game in progress.
///
/// Transitions borrow `self` and return the next state, so a caller can
/// keep any earlier state around for previews or AI look-ahead.
///
/// A turn goes: [`roll`](Self::roll) (or [`apply_roll`](Self::apply_roll)),
/// then [`move_token`](Self::move_token) with one of
/// [`moveable`](Self::moveable). When the roll leaves nothing to move, or
/// is the third six in a row, the turn ends by itself.
#[derive(Clone, Debug, PartialEq)]
pub struct LudoGame {
    config: GameConfig,
    players: Vec<PlayerColor>,
    tokens: Vec<Token>,
    turn: TurnState,
    win: WinState,
    pending_roll: Option<u8>,
    moveable: SmallVec<[TokenId; TOKENS_PER_PLAYER]>,
    last_capture: Option<TokenId>,
    captures: PlayerMap<u32>,
}

impl LudoGame {
    /// Start a game for a menu mode.
    #[must_use]
    pub fn new(mode: GameMode, config: GameConfig) -> Self {
        Self::start(mode.players(), config)
    }

    /// Start a game with an explicit seat list; the first seat rolls first.
    ///
    /// Needs 2-4 distinct colors.
    pub fn with_players(players: &[PlayerColor], config: GameConfig) -> Result<Self, RulesError> {
        if !(2..=4).contains(&players.len()) {
            return Err(RulesError::InvalidPlayers(format!(
                "need 2-4 players, got {}",
                players.len()
            )));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].contains(player) {
                return Err(RulesError::InvalidPlayers(format!("{} listed twice", player)));
            }
        }
        Ok(Self::start(players.to_vec(), config))
    }

    fn start(players: Vec<PlayerColor>, config: GameConfig) -> Self {
        let tokens = initial_tokens(&players);
        let win = compute_win_state(&tokens, &players);
        info!(players = ?players, seed = config.seed, "new game");

        Self {
            turn: TurnState::new(players[0]),
            config,
            tokens,
            win,
            players,
            pending_roll: None,
            moveable: SmallVec::new(),
            last_capture: None,
            captures: PlayerMap::with_value(0),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every seat in the game, in turn order.
    #[must_use]
    pub fn players(&self) -> &[PlayerColor] {
        &self.players
    }

    /// Seats still racing: those that have not finished all their tokens.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerColor> {
        self.players
            .iter()
            .copied()
            .filter(|&p| !self.win.is_winner(p))
            .collect()
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// One player's four tokens.
    #[must_use]
    pub fn player_tokens(&self, player: PlayerColor) -> Vec<Token> {
        self.tokens.iter().filter(|t| t.player() == player).copied().collect()
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerColor {
        self.turn.current_player
    }

    #[must_use]
    pub fn win_state(&self) -> &WinState {
        &self.win
    }

    /// Players by place, best first.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerColor> {
        winners_in_order(&self.win)
    }

    /// Roll waiting to be spent on a move.
    #[must_use]
    pub fn pending_roll(&self) -> Option<u8> {
        self.pending_roll
    }

    /// Tokens the current player may move with the pending roll.
    #[must_use]
    pub fn moveable(&self) -> &[TokenId] {
        &self.moveable
    }

    /// Token sent home by the most recent move, if any.
    #[must_use]
    pub fn last_capture(&self) -> Option<TokenId> {
        self.last_capture
    }

    /// Opponent tokens a player has sent home this game.
    #[must_use]
    pub fn captures(&self, player: PlayerColor) -> u32 {
        self.captures[player]
    }

    /// True once play has stopped under the configured continuation rule.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !should_continue(&self.win, self.config.continue_after_winner)
    }

    // === Transitions ===

    /// Roll the die for the current player and apply the result.
    pub fn roll(&self, rng: &mut GameRng) -> Result<(Self, u8), RulesError> {
        self.check_can_roll()?;
        let value = dice::roll(rng);
        Ok((self.apply_roll(value)?, value))
    }

    /// Apply a known dice value for the current player.
    pub fn apply_roll(&self, value: u8) -> Result<Self, RulesError> {
        self.check_can_roll()?;
        validate_roll(value)?;

        let player = self.turn.current_player;
        let forfeits = grants_extra_turn(value)
            && ends_turn_after_sixes(self.turn.consecutive_sixes.saturating_add(1));
        let turn = self.turn.process_roll(value);

        let mut next = self.clone();
        next.last_capture = None;
        next.moveable.clear();

        if forfeits {
            debug!(%player, "turn forfeited after three sixes");
            next.turn = turn.advance_to_next(&self.active_players());
            return Ok(next);
        }

        let moveable = moveable_tokens(&self.player_tokens(player), value);
        if moveable.is_empty() {
            debug!(%player, roll = value, "no legal move");
            next.turn = turn.end_turn(&self.active_players());
            return Ok(next);
        }

        next.turn = turn;
        next.pending_roll = Some(value);
        next.moveable = moveable.iter().map(|t| t.id).collect();
        Ok(next)
    }

    /// Move one of the current player's tokens with the pending roll.
    pub fn move_token(&self, id: TokenId) -> Result<Self, RulesError> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }
        let roll = self.pending_roll.ok_or(RulesError::NoRollPending)?;
        let token = *self.token(id).ok_or(RulesError::UnknownToken(id))?;
        let player = self.turn.current_player;
        if token.player() != player {
            return Err(RulesError::NotYourToken { token: id, current: player });
        }

        let outcome = tokens::move_token(&token, roll, &self.tokens)?;

        let mut next = self.clone();
        apply_outcome(next.tokens.iter_mut(), &outcome);
        if outcome.did_capture() {
            next.captures[player] += 1;
        }
        next.last_capture = outcome.captured.map(|t| t.id);
        next.win = compute_win_state(&next.tokens, &next.players);
        next.pending_roll = None;
        next.moveable.clear();

        if next.win.is_winner(player) && !self.win.is_winner(player) {
            let place = next.win.result_for(player).map_or(0, |r| r.rank);
            info!(%player, place, "player finished all tokens");
        }

        let active = next.active_players();
        next.turn = if next.win.is_winner(player) {
            next.turn.advance_to_next(&active)
        } else {
            next.turn.end_turn(&active)
        };

        if next.is_over() {
            info!(standings = ?next.standings(), "game over");
        }
        Ok(next)
    }

    /// Give up the rest of the roll. An earned extra roll is kept.
    pub fn end_turn(&self) -> Result<Self, RulesError> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }
        let mut next = self.clone();
        next.pending_roll = None;
        next.moveable.clear();
        next.turn = self.turn.end_turn(&self.active_players());
        Ok(next)
    }

    /// Roll and move for the current player using the configured AI difficulty.
    pub fn play_ai_turn(&self, rng: &mut GameRng) -> Result<Self, RulesError> {
        let (rolled, value) = self.roll(rng)?;
        if rolled.pending_roll.is_none() {
            return Ok(rolled);
        }

        let player = rolled.current_player();
        let choice = select_move(
            &rolled.player_tokens(player),
            value,
            &rolled.tokens,
            rolled.config.ai_difficulty,
            rng,
        );
        match choice {
            Some(token) => rolled.move_token(token.id),
            None => rolled.end_turn(),
        }
    }

    fn check_can_roll(&self) -> Result<(), RulesError> {
        if self.is_over() {
            return Err(RulesError::GameOver);
        }
        if self.pending_roll.is_some() {
            return Err(RulesError::RollPending);
        }
        if !self.turn.can_roll() {
            return Err(RulesError::CannotRoll);
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        self.win = compute_win_state(&tokens, &self.players);
        self.tokens = tokens;
        self
    }
}
