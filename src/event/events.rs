use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::handler::GameObserver;
use crate::game::{Card, Player};

/// Notifications emitted by the rules engine, as plain values
///
/// Events represent facts about things that have already happened. Players
/// are identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    GameRestarted,
    TurnAdvanced,
    CardPlayed { player: String, stack_id: usize },
    CardDrawn { card: Card },
    CardsSwapped,
    Passed { player: String },
    GameEnded { winner: String, is_draw: bool },
}

impl GameEvent {
    /// Get a stable snake_case tag for the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::GameStarted => "game_started",
            GameEvent::GameRestarted => "game_restarted",
            GameEvent::TurnAdvanced => "turn_advanced",
            GameEvent::CardPlayed { .. } => "card_played",
            GameEvent::CardDrawn { .. } => "card_drawn",
            GameEvent::CardsSwapped => "cards_swapped",
            GameEvent::Passed { .. } => "passed",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }
}

/// Observer that records every notification in arrival order.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<GameEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.lock().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.lock().iter().map(GameEvent::event_type).collect()
    }

    pub fn last(&self) -> Option<GameEvent> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Returns the recorded events and starts over with an empty log.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn record(&self, event: GameEvent) {
        self.lock().push(event);
    }

    // A panicking observer elsewhere must not take the log down with it
    fn lock(&self) -> MutexGuard<'_, Vec<GameEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GameObserver for EventLog {
    fn after_game_started(&self) {
        self.record(GameEvent::GameStarted);
    }

    fn after_turn_advanced(&self) {
        self.record(GameEvent::TurnAdvanced);
    }

    fn after_card_played(&self, player: &Player, stack_id: usize) {
        self.record(GameEvent::CardPlayed {
            player: player.name.clone(),
            stack_id,
        });
    }

    fn after_card_drawn(&self, card: &Card) {
        self.record(GameEvent::CardDrawn { card: *card });
    }

    fn after_cards_swapped(&self) {
        self.record(GameEvent::CardsSwapped);
    }

    fn after_pass(&self, player: &Player) {
        self.record(GameEvent::Passed {
            player: player.name.clone(),
        });
    }

    fn after_game_ended(&self, winner: &Player, is_draw: bool) {
        self.record(GameEvent::GameEnded {
            winner: winner.name.clone(),
            is_draw,
        });
    }

    fn after_game_restarted(&self) {
        self.record(GameEvent::GameRestarted);
    }

    fn observer_name(&self) -> &'static str {
        "EventLog"
    }
}
