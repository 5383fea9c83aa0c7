// The rules engine owns the running game and is the only thing that mutates it.
// Presentation code calls the commands below, consults the `can_*` predicates
// to explain refusals, and learns about changes through `GameObserver`.
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::event::GameObserver;
use crate::game::cards::{can_place_on, Card};
use crate::game::config::{ConfigError, RulesConfig};
use crate::game::session::{GameOutcome, GameSession};

/// Number of center piles; valid stack ids are `0..CENTER_PILES`.
pub const CENTER_PILES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("No game currently running")]
    NoActiveGame,
    #[error("Invalid stack id: {0}")]
    InvalidStackId(usize),
    #[error("Invalid player name: {0}")]
    InvalidPlayerName(String),
}

pub struct RulesEngine {
    game: Option<GameSession>,
    observers: Vec<Arc<dyn GameObserver>>,
    config: RulesConfig,
    rng: StdRng,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine {
    /// Engine with the standard rules and an OS-seeded shuffle.
    pub fn new() -> Self {
        Self {
            game: None,
            observers: Vec::new(),
            config: RulesConfig::default(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Engine with the standard rules whose deals are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    pub fn with_config(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Re-seeds the shuffle used by future deals and swaps.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn add_observer(&mut self, observer: Arc<dyn GameObserver>) {
        debug!(observer = observer.observer_name(), "Observer registered");
        self.observers.push(observer);
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.game.as_ref().and_then(GameSession::outcome)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Deals a new game, replacing any previous one.
    pub fn start_game(&mut self, player1_name: &str, player2_name: &str) -> Result<(), GameError> {
        self.validate_player_names(player1_name, player2_name)?;

        let game = GameSession::deal(player1_name, player2_name, &self.config, &mut self.rng);
        info!(
            player1 = %player1_name,
            player2 = %player2_name,
            center1 = ?game.top_card(0),
            center2 = ?game.top_card(1),
            "Starting game"
        );
        self.game = Some(game);

        self.notify(|o| o.after_game_started());
        Ok(())
    }

    /// Deals a new game for the players of the current one.
    pub fn restart_game(&mut self) -> Result<(), GameError> {
        let game = self.active_game()?;
        let player1 = game.player1().name.clone();
        let player2 = game.player2().name.clone();
        self.validate_player_names(&player1, &player2)?;

        info!(player1 = %player1, player2 = %player2, "Restarting game");
        self.notify(|o| o.after_game_restarted());
        self.start_game(&player1, &player2)
    }

    /// Replaces the running game with a prepared position. No notifications.
    pub fn install_game(&mut self, game: GameSession) {
        debug!(
            player1 = %game.player1().name,
            player2 = %game.player2().name,
            "Installing prepared game"
        );
        self.game = Some(game);
    }

    /// Drops the running game, if any.
    pub fn clear_game(&mut self) -> Option<GameSession> {
        self.game.take()
    }

    pub fn can_play_card(&self, card: &Card, stack_id: usize) -> Result<bool, GameError> {
        let game = self.active_game()?;
        validate_stack_id(stack_id)?;
        Ok(card_fits(game, card, stack_id))
    }

    pub fn can_draw_card(&self) -> Result<bool, GameError> {
        let game = self.active_game()?;
        Ok(self.draw_allowed(game))
    }

    pub fn can_swap_cards(&self) -> Result<bool, GameError> {
        let game = self.active_game()?;
        Ok(self.swap_allowed(game))
    }

    pub fn can_pass(&self) -> Result<bool, GameError> {
        let game = self.active_game()?;
        Ok(self.pass_allowed(game))
    }

    /// Plays `card` from the current player's hand onto center pile
    /// `stack_id`. A card that is not in hand or does not fit is ignored.
    pub fn play_card(&mut self, card: Card, stack_id: usize) -> Result<(), GameError> {
        let game = self.active_game()?;
        validate_stack_id(stack_id)?;

        let player = game.current_player();
        if !player.has_card(&card) {
            debug!(player = %player.name, card = %card, "Rejected play: card not in hand");
            return Ok(());
        }
        if !card_fits(game, &card, stack_id) {
            debug!(
                player = %player.name,
                card = %card,
                stack_id,
                top = ?game.top_card(stack_id),
                "Rejected play: card does not fit"
            );
            return Ok(());
        }

        let game = self.active_game_mut()?;
        game.current_player_mut().remove_from_hand(&card);
        game.push_center(stack_id, card);
        game.set_last_action_pass(false);

        let slot = game.current_slot();
        let emptied = game.current_player().is_out_of_cards();
        debug!(player = %game.current_player().name, card = %card, stack_id, "Card played");

        let game = self.active_game()?;
        self.notify(|o| o.after_card_played(game.current_player(), stack_id));

        if emptied {
            self.finish_game(GameOutcome::Winner(slot))
        } else {
            self.advance_turn()
        }
    }

    /// Moves the top of the current player's draw pile into their hand.
    pub fn draw_card(&mut self) -> Result<(), GameError> {
        let game = self.active_game()?;
        if !self.draw_allowed(game) {
            debug!(
                player = %game.current_player().name,
                hand = game.current_player().hand.len(),
                draw_pile = game.current_player().draw_pile.len(),
                "Rejected draw"
            );
            return Ok(());
        }

        let game = self.active_game_mut()?;
        let Some(card) = game.current_player_mut().draw() else {
            return Ok(());
        };
        game.set_last_action_pass(false);
        debug!(player = %game.current_player().name, card = %card, "Card drawn");

        self.notify(|o| o.after_card_drawn(&card));
        self.advance_turn()
    }

    /// Shuffles the current player's hand into their draw pile and takes a
    /// fresh hand from the top.
    pub fn swap_cards(&mut self) -> Result<(), GameError> {
        let game = self.active_game()?;
        if !self.swap_allowed(game) {
            debug!(
                player = %game.current_player().name,
                hand = game.current_player().hand.len(),
                draw_pile = game.current_player().draw_pile.len(),
                "Rejected swap"
            );
            return Ok(());
        }

        let redraw = self.config.swap_redraw_count;
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        let player = game.current_player_mut();

        let hand = std::mem::take(&mut player.hand);
        player.draw_pile.extend(hand);
        player.draw_pile.shuffle(&mut self.rng);
        let split_at = player.draw_pile.len().saturating_sub(redraw);
        player.hand = player.draw_pile.split_off(split_at);

        game.set_last_action_pass(false);
        debug!(
            player = %game.current_player().name,
            draw_pile = game.current_player().draw_pile.len(),
            "Cards swapped"
        );

        self.notify(|o| o.after_cards_swapped());
        self.advance_turn()
    }

    /// Passes when the current player has nothing else to do. A pass right
    /// after the other player's pass ends the game.
    pub fn pass(&mut self) -> Result<(), GameError> {
        let game = self.active_game()?;
        if !self.pass_allowed(game) {
            debug!(player = %game.current_player().name, "Rejected pass: a move is available");
            return Ok(());
        }

        if game.last_action_was_pass() {
            let outcome = compare_hands(game);
            debug!(player = %game.current_player().name, "Second consecutive pass");
            return self.finish_game(outcome);
        }

        let game = self.active_game_mut()?;
        game.set_last_action_pass(true);
        debug!(player = %game.current_player().name, "Player passed");

        let game = self.active_game()?;
        self.notify(|o| o.after_pass(game.current_player()));
        self.advance_turn()
    }

    fn active_game(&self) -> Result<&GameSession, GameError> {
        self.game.as_ref().ok_or(GameError::NoActiveGame)
    }

    fn active_game_mut(&mut self) -> Result<&mut GameSession, GameError> {
        self.game.as_mut().ok_or(GameError::NoActiveGame)
    }

    fn validate_player_names(&self, player1: &str, player2: &str) -> Result<(), GameError> {
        if player1.trim().is_empty() || player2.trim().is_empty() {
            return Err(GameError::InvalidPlayerName(
                "Player names cannot be blank".to_string(),
            ));
        }

        if player1 == player2 {
            return Err(GameError::InvalidPlayerName(format!(
                "Player names must differ, both are {player1:?}"
            )));
        }

        let max = self.config.max_name_length;
        for name in [player1, player2] {
            if name.chars().count() > max {
                return Err(GameError::InvalidPlayerName(format!(
                    "{name:?} is longer than {max} characters"
                )));
            }
        }

        Ok(())
    }

    fn draw_allowed(&self, game: &GameSession) -> bool {
        let player = game.current_player();
        !player.draw_pile.is_empty() && player.hand.len() < self.config.max_hand_size
    }

    fn swap_allowed(&self, game: &GameSession) -> bool {
        let player = game.current_player();
        player.hand.len() >= self.config.min_hand_size_for_swap && !player.draw_pile.is_empty()
    }

    fn pass_allowed(&self, game: &GameSession) -> bool {
        !self.draw_allowed(game) && !self.swap_allowed(game) && !has_playable_card(game)
    }

    fn advance_turn(&mut self) -> Result<(), GameError> {
        let game = self.active_game_mut()?;
        game.advance_turn();
        debug!(next_player = %game.current_player().name, "Turn advanced");

        self.notify(|o| o.after_turn_advanced());
        Ok(())
    }

    fn finish_game(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        let game = self.active_game_mut()?;
        game.finish(outcome);

        let game = self.active_game()?;
        let (winner, is_draw) = match outcome {
            GameOutcome::Winner(slot) => (game.player(slot), false),
            GameOutcome::Draw => (game.current_player(), true),
        };
        info!(
            winner = %winner.name,
            is_draw,
            player1_hand = game.player1().hand.len(),
            player2_hand = game.player2().hand.len(),
            "Game ended"
        );

        self.notify(|o| o.after_game_ended(winner, is_draw));
        Ok(())
    }

    fn notify(&self, f: impl Fn(&dyn GameObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}

fn validate_stack_id(stack_id: usize) -> Result<(), GameError> {
    if stack_id < CENTER_PILES {
        Ok(())
    } else {
        Err(GameError::InvalidStackId(stack_id))
    }
}

fn card_fits(game: &GameSession, card: &Card, stack_id: usize) -> bool {
    game.top_card(stack_id)
        .is_some_and(|top| can_place_on(top, card))
}

fn has_playable_card(game: &GameSession) -> bool {
    game.current_player()
        .hand
        .iter()
        .any(|card| (0..CENTER_PILES).any(|stack_id| card_fits(game, card, stack_id)))
}

/// Fewer hand cards wins; the current player is the reference side.
fn compare_hands(game: &GameSession) -> GameOutcome {
    let current = game.current_player().hand.len();
    let opponent = game.opponent().hand.len();

    match current.cmp(&opponent) {
        std::cmp::Ordering::Less => GameOutcome::Winner(game.current_slot()),
        std::cmp::Ordering::Greater => GameOutcome::Winner(game.current_slot().other()),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    }
}
