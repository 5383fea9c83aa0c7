use crate::game::{Card, Player};

/// Trait for components that react to changes in the game
///
/// The rules engine calls these hooks synchronously, right after the state
/// change they describe. Every hook has an empty default so implementors
/// only override what they care about.
///
/// Observers must not call back into the engine from inside a hook.
pub trait GameObserver: Send + Sync {
    /// A new game has been dealt.
    fn after_game_started(&self) {}

    /// The turn passed to the other player.
    fn after_turn_advanced(&self) {}

    /// `player` put a card on center pile `stack_id`.
    fn after_card_played(&self, _player: &Player, _stack_id: usize) {}

    /// The current player drew `card` from their draw pile.
    fn after_card_drawn(&self, _card: &Card) {}

    /// The current player swapped their hand against their draw pile.
    fn after_cards_swapped(&self) {}

    /// `player` passed.
    fn after_pass(&self, _player: &Player) {}

    /// The game is over. `winner` carries no meaning when `is_draw` is set.
    fn after_game_ended(&self, _winner: &Player, _is_draw: bool) {}

    /// The previous game was thrown away in favour of a new deal with the
    /// same players. Followed by `after_game_started`.
    fn after_game_restarted(&self) {}

    /// Get a human-readable name for this observer (for logging/debugging)
    fn observer_name(&self) -> &'static str {
        "GameObserver"
    }
}

/// A no-op observer for testing
///
/// Useful where an observer is required but its behaviour is irrelevant.
pub struct NoOpObserver;

impl GameObserver for NoOpObserver {
    fn observer_name(&self) -> &'static str {
        "NoOpObserver"
    }
}
