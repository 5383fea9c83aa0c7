use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::cards::Card;
use crate::game::config::RulesConfig;
use crate::game::player::Player;

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Winner(PlayerSlot),
    Draw,
}

/// State of one running game of UpAndDown.
///
/// The 52 cards are split across both hands, both draw piles and both
/// center piles at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    players: [Player; 2],
    current: PlayerSlot,
    center_piles: [Vec<Card>; 2],
    last_action_was_pass: bool,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Builds a session from an arbitrary position, player one to move.
    pub fn new(
        player1: Player,
        player2: Player,
        center_pile1: Vec<Card>,
        center_pile2: Vec<Card>,
    ) -> Self {
        Self {
            players: [player1, player2],
            current: PlayerSlot::One,
            center_piles: [center_pile1, center_pile2],
            last_action_was_pass: false,
            outcome: None,
        }
    }

    /// Shuffles a fresh deck and deals it.
    ///
    /// Hands take the first `initial_hand_size` cards each, the rest is
    /// split in two draw piles in shuffle order, and each center pile is
    /// seeded with the top card of the matching draw pile.
    pub fn deal<R: Rng + ?Sized>(
        player1_name: &str,
        player2_name: &str,
        config: &RulesConfig,
        rng: &mut R,
    ) -> Self {
        let mut cards = Card::all_cards();
        cards.shuffle(rng);

        let hand_size = config.initial_hand_size;
        let player1_hand: Vec<Card> = cards.drain(0..hand_size).collect();
        let player2_hand: Vec<Card> = cards.drain(0..hand_size).collect();

        let mut player2_draw = cards.split_off(config.dealt_draw_pile_size());
        let mut player1_draw = cards;

        let center1: Vec<Card> = player1_draw.pop().into_iter().collect();
        let center2: Vec<Card> = player2_draw.pop().into_iter().collect();

        Self::new(
            Player::new(player1_name, player1_hand, player1_draw),
            Player::new(player2_name, player2_hand, player2_draw),
            center1,
            center2,
        )
    }

    /// Same position with `slot` to move.
    pub fn with_current(mut self, slot: PlayerSlot) -> Self {
        self.current = slot;
        self
    }

    /// Same position with the pass flag set as if the previous player had
    /// just passed.
    pub fn with_last_action_pass(mut self, passed: bool) -> Self {
        self.last_action_was_pass = passed;
        self
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player1(&self) -> &Player {
        self.player(PlayerSlot::One)
    }

    pub fn player2(&self) -> &Player {
        self.player(PlayerSlot::Two)
    }

    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn opponent(&self) -> &Player {
        self.player(self.current.other())
    }

    pub fn last_action_was_pass(&self) -> bool {
        self.last_action_was_pass
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Center pile by index; `None` outside `0..2`.
    pub fn center_pile(&self, stack_id: usize) -> Option<&[Card]> {
        self.center_piles.get(stack_id).map(Vec::as_slice)
    }

    pub fn top_card(&self, stack_id: usize) -> Option<&Card> {
        self.center_piles.get(stack_id).and_then(|pile| pile.last())
    }

    /// Every card held anywhere in the session.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.players
            .iter()
            .flat_map(|p| p.hand.iter().chain(p.draw_pile.iter()))
            .chain(self.center_piles.iter().flatten())
    }

    pub(crate) fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current.index()]
    }

    pub(crate) fn push_center(&mut self, stack_id: usize, card: Card) {
        self.center_piles[stack_id].push(card);
    }

    pub(crate) fn set_last_action_pass(&mut self, passed: bool) {
        self.last_action_was_pass = passed;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current = self.current.other();
    }

    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
    }
}
