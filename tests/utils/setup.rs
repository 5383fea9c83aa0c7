use std::collections::HashSet;
use std::sync::{Arc, Once};

use tracing_subscriber::EnvFilter;
use upanddown::{Card, EventLog, GameSession, RulesConfig, RulesEngine};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

static TRACING: Once = Once::new();

/// Route engine logs to the test output; `RUST_LOG=upanddown=debug` shows them.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "upanddown=warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

pub struct TestSetup {
    pub engine: RulesEngine,
    pub log: Arc<EventLog>,
}

impl TestSetup {
    pub fn game(&self) -> &GameSession {
        self.engine.game().expect("a game should be running")
    }
}

pub struct TestSetupBuilder {
    seed: u64,
    config: RulesConfig,
    players: Option<(String, String)>,
    game: Option<GameSession>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            seed: 42,
            config: RulesConfig::default(),
            players: None,
            game: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Start a dealt game for these players once built.
    pub fn with_players(mut self, player1: &str, player2: &str) -> Self {
        self.players = Some((player1.to_string(), player2.to_string()));
        self
    }

    pub fn with_two_players(self) -> Self {
        self.with_players("alice", "bob")
    }

    /// Install a prepared position instead of dealing.
    pub fn with_game(mut self, game: GameSession) -> Self {
        self.game = Some(game);
        self
    }

    pub fn build(self) -> TestSetup {
        init_tracing();

        let log = Arc::new(EventLog::new());
        let mut engine =
            RulesEngine::with_config(self.config).expect("test config should be valid");
        engine.reseed(self.seed);
        engine.add_observer(log.clone());

        if let Some((player1, player2)) = &self.players {
            engine
                .start_game(player1, player2)
                .expect("test players should be valid");
        }
        if let Some(game) = self.game {
            engine.install_game(game);
        }

        TestSetup { engine, log }
    }
}

/// Asserts the session holds each of the 52 cards exactly once.
pub fn assert_full_deck(game: &GameSession) {
    let held: Vec<&Card> = game.all_cards().collect();
    let unique: HashSet<&Card> = held.iter().copied().collect();
    let expected = Card::all_cards();

    assert_eq!(held.len(), 52, "session should hold 52 cards");
    assert_eq!(unique.len(), 52, "no card may appear twice");
    assert!(
        expected.iter().all(|c| unique.contains(c)),
        "every card of the deck should be present"
    );
}
