// Public API
pub use cards::{can_place_on, Card, CardParseError, Rank, Suit, RANK_COUNT};
pub use config::{ConfigError, RulesConfig, DECK_SIZE};
pub use logic::{GameError, RulesEngine, CENTER_PILES};
pub use player::Player;
pub use session::{GameOutcome, GameSession, PlayerSlot};

// Internal modules
mod cards;
mod config;
mod logic;
mod player;
mod session;
