use super::basic::Card;

/// Whether `card` may be placed on a center pile whose top card is `top`.
///
/// Neighbouring ranks (distance 1 around the cycle) are always accepted.
/// A gap of two ranks is accepted only within the same suit. Nothing else
/// is, including a card of the same rank.
pub fn can_place_on(top: &Card, card: &Card) -> bool {
    match top.cyclic_distance(card).abs() {
        1 => true,
        2 => card.suit == top.suit,
        _ => false,
    }
}
