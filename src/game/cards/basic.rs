use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Number of ranks in the rank cycle.
pub const RANK_COUNT: i8 = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("Card text must be two characters, got {0:?}")]
    InvalidLength(String),
    #[error("Unknown rank symbol: {0}")]
    UnknownRank(String),
    #[error("Unknown suit symbol: {0}")]
    UnknownSuit(String),
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Clubs = 0,
    Spades = 1,
    Hearts = 2,
    Diamonds = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "C",
                Suit::Spades => "S",
                Suit::Hearts => "H",
                Suit::Diamonds => "D",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "C" => Ok(Suit::Clubs),
            "S" => Ok(Suit::Spades),
            "H" => Ok(Suit::Hearts),
            "D" => Ok(Suit::Diamonds),
            _ => Err(CardParseError::UnknownSuit(s.to_string())),
        }
    }
}

/// Ranks in cycle order; King wraps around to Ace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Ace = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
    Nine = 8,
    Ten = 9,
    Jack = 10,
    Queen = 11,
    King = 12,
}

impl Rank {
    /// Position of the rank on the cycle, `0` for Ace through `12` for King.
    pub fn index(self) -> i8 {
        self as i8
    }

    /// Signed distance from `other` to `self` around the rank cycle,
    /// normalized to `-6..=6`.
    ///
    /// ```
    /// use upanddown::game::Rank;
    ///
    /// assert_eq!(Rank::Ace.cyclic_distance(Rank::King), 1);
    /// assert_eq!(Rank::King.cyclic_distance(Rank::Ace), -1);
    /// assert_eq!(Rank::Five.cyclic_distance(Rank::Five), 0);
    /// ```
    pub fn cyclic_distance(self, other: Rank) -> i8 {
        let d = (self.index() - other.index()).rem_euclid(RANK_COUNT);
        if d > RANK_COUNT / 2 {
            d - RANK_COUNT
        } else {
            d
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Ace => "A",
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = CardParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(CardParseError::UnknownRank(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn from_string(s: &str) -> Result<Self, CardParseError> {
        if s.len() != 2 || !s.is_ascii() {
            return Err(CardParseError::InvalidLength(s.to_string()));
        }

        let rank = Rank::try_from(&s[0..1])?;
        let suit = Suit::try_from(&s[1..2])?;

        Ok(Self::new(rank, suit))
    }

    /// Cyclic rank distance from `other` to `self`; suits are ignored.
    pub fn cyclic_distance(&self, other: &Card) -> i8 {
        self.rank.cyclic_distance(other.rank)
    }

    /// The full 52-card set, suit by suit.
    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
