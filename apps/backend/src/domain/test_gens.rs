// Proptest generators for domain types.
// These generators ensure unique cards and consistent aggregates for property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    (0usize..13).prop_map(|i| Rank::ALL[i])
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        // Partial Fisher-Yates over the first N slots
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand (vector of 1-13 unique cards)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13)
}

/// A full deal: 52 cards partitioned into four 13-card hands.
pub fn four_full_hands() -> impl Strategy<Value = [Vec<Card>; 4]> {
    unique_cards(52).prop_map(|cards| {
        let mut hands: [Vec<Card>; 4] = Default::default();
        for (i, card) in cards.into_iter().enumerate() {
            hands[i % 4].push(card);
        }
        for hand in hands.iter_mut() {
            hand.sort();
        }
        hands
    })
}

/// Four distinct cards in seat order.
pub fn trick_cards() -> impl Strategy<Value = [Card; 4]> {
    unique_cards(4).prop_map(|c| [c[0], c[1], c[2], c[3]])
}

/// Generate a hand containing no cards of the given suit
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.suit != excluded_suit)
            .collect();
        let count = rng.random_range(1..=13.min(cards.len()));
        for i in 0..count {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}

/// Any seed for the dealing RNG.
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
