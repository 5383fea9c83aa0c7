use upanddown::{Card, GameSession, Player, PlayerSlot};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($code:literal),* $(,)?) => {
        vec![$(upanddown::Card::from_string($code).expect("valid card code")),*]
    };
}

// ============================================================================
// Game Setup Utilities
// ============================================================================

/// Builds a mid-game position that still holds the whole deck.
///
/// Cards not placed in a hand, draw pile or on top of a center pile are
/// buried under the two center piles, so every position satisfies the deck
/// invariant.
pub struct GameBuilder {
    names: [String; 2],
    hands: [Vec<Card>; 2],
    draw_piles: [Vec<Card>; 2],
    tops: [Card; 2],
    current: PlayerSlot,
    last_action_was_pass: bool,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            names: ["alice".to_string(), "bob".to_string()],
            hands: [vec![], vec![]],
            draw_piles: [vec![], vec![]],
            tops: [card("7H"), card("7S")],
            current: PlayerSlot::One,
            last_action_was_pass: false,
        }
    }

    pub fn with_hand(mut self, slot: PlayerSlot, cards: Vec<Card>) -> Self {
        self.hands[slot.index()] = cards;
        self
    }

    pub fn with_draw_pile(mut self, slot: PlayerSlot, cards: Vec<Card>) -> Self {
        self.draw_piles[slot.index()] = cards;
        self
    }

    pub fn with_tops(mut self, top1: &str, top2: &str) -> Self {
        self.tops = [card(top1), card(top2)];
        self
    }

    pub fn with_current(mut self, slot: PlayerSlot) -> Self {
        self.current = slot;
        self
    }

    pub fn after_pass(mut self) -> Self {
        self.last_action_was_pass = true;
        self
    }

    /// Both players hold cards that fit neither 7H nor 7S and have nothing
    /// left to draw.
    pub fn with_stuck_players(self, alice_hand: Vec<Card>, bob_hand: Vec<Card>) -> Self {
        self.with_tops("7H", "7S")
            .with_hand(PlayerSlot::One, alice_hand)
            .with_hand(PlayerSlot::Two, bob_hand)
            .with_draw_pile(PlayerSlot::One, vec![])
            .with_draw_pile(PlayerSlot::Two, vec![])
    }

    pub fn build(self) -> GameSession {
        let placed: Vec<Card> = self
            .hands
            .iter()
            .chain(self.draw_piles.iter())
            .flatten()
            .copied()
            .chain(self.tops)
            .collect();

        let buried: Vec<Card> = Card::all_cards()
            .into_iter()
            .filter(|c| !placed.contains(c))
            .collect();
        let (under1, under2) = buried.split_at(buried.len() / 2);

        let mut center1 = under1.to_vec();
        center1.push(self.tops[0]);
        let mut center2 = under2.to_vec();
        center2.push(self.tops[1]);

        let [name1, name2] = self.names;
        let [hand1, hand2] = self.hands;
        let [draw1, draw2] = self.draw_piles;

        GameSession::new(
            Player::new(name1, hand1, draw1),
            Player::new(name2, hand2, draw2),
            center1,
            center2,
        )
        .with_current(self.current)
        .with_last_action_pass(self.last_action_was_pass)
    }
}

fn card(code: &str) -> Card {
    Card::from_string(code).expect("valid card code")
}
