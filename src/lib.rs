// Rules engine for UpAndDown, a two-player card game played on two shared
// center piles. Presentation layers drive `RulesEngine` and observe it through
// `GameObserver`.

pub mod event;
pub mod game;

// Re-export commonly used types for easier access in tests
pub use event::{EventLog, GameEvent, GameObserver, NoOpObserver};
pub use game::{
    Card, GameError, GameOutcome, GameSession, Player, PlayerSlot, Rank, RulesConfig,
    RulesEngine, Suit,
};
