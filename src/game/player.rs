use serde::{Deserialize, Serialize};

use crate::game::cards::Card;

/// One of the two players: visible hand plus a private draw pile.
///
/// The end of `draw_pile` is its top; drawing pops from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub draw_pile: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Vec<Card>, draw_pile: Vec<Card>) -> Self {
        Self {
            name: name.into(),
            hand,
            draw_pile,
        }
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Removes `card` from the hand, returning whether it was there.
    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Moves the top of the draw pile into the hand.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.draw_pile.pop()?;
        self.hand.push(card);
        Some(card)
    }

    /// Hand and draw pile are both empty.
    pub fn is_out_of_cards(&self) -> bool {
        self.hand.is_empty() && self.draw_pile.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.hand.len() + self.draw_pile.len()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} in hand, {} to draw)",
            self.name,
            self.hand.len(),
            self.draw_pile.len()
        )
    }
}
