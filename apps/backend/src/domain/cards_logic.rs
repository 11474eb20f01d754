//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn hand_contains(hand: &[Card], card: Card) -> bool {
    hand.iter().any(|c| *c == card)
}

/// Whether `a` displaces the current best card `b` when scanning a trick.
///
/// Hearts outrank every other suit. Otherwise the higher rank wins regardless
/// of suit (the led suit does not restrict the winner). Equal ranks never
/// displace, so the first card seen keeps a tie.
pub fn card_beats(a: Card, b: Card) -> bool {
    let a_trump = a.suit.is_trump();
    let b_trump = b.suit.is_trump();
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    a.rank > b.rank
}
