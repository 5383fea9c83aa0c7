pub mod basic;
pub mod placement;


pub use basic::{Card, CardParseError, Rank, Suit, RANK_COUNT};
pub use placement::can_place_on;
