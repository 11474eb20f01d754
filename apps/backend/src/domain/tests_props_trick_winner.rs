//! Property tests for trick resolution against an independent oracle.

use proptest::prelude::*;

use crate::domain::tricks::{resolve_trick, winning_index};
use crate::domain::{test_gens, test_prelude, Card, Suit};

/// Independent oracle: the winner is the first card (seat order) with the
/// highest (is_heart, rank) key.
fn oracle_winner(cards: &[Card; 4]) -> usize {
    let key = |c: &Card| (c.suit == Suit::Hearts, c.rank.value());
    let best = cards.iter().map(key).max().unwrap_or((false, 0));
    cards.iter().position(|c| key(c) == best).unwrap_or(0)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: resolution agrees with the oracle for any four distinct cards.
    #[test]
    fn prop_winner_matches_oracle(cards in test_gens::trick_cards()) {
        prop_assert_eq!(winning_index(&cards), oracle_winner(&cards));
        prop_assert_eq!(resolve_trick(&cards), cards[oracle_winner(&cards)]);
    }

    /// Property: if any heart is played, a heart wins.
    #[test]
    fn prop_heart_always_wins_when_present(cards in test_gens::trick_cards()) {
        let winner = resolve_trick(&cards);
        if cards.iter().any(|c| c.suit == Suit::Hearts) {
            prop_assert_eq!(winner.suit, Suit::Hearts);
        }
    }

    /// Property: with no hearts, the winner has the maximum rank and is the first such card.
    #[test]
    fn prop_no_hearts_highest_rank_first_seen(cards in test_gens::trick_cards()) {
        let no_hearts = cards.map(|c| if c.suit == Suit::Hearts {
            Card { suit: Suit::Clubs, rank: c.rank }
        } else {
            c
        });
        let idx = winning_index(&no_hearts);
        let max_rank = no_hearts.iter().map(|c| c.rank).max().unwrap_or(no_hearts[0].rank);
        prop_assert_eq!(no_hearts[idx].rank, max_rank);
        prop_assert!(no_hearts[..idx].iter().all(|c| c.rank < max_rank));
    }

    /// Property: a sole heart wins regardless of its rank.
    #[test]
    fn prop_sole_heart_wins(
        cards in test_gens::trick_cards(),
        heart_seat in 0usize..4,
        heart_rank in test_gens::rank(),
    ) {
        let mut trick = cards.map(|c| if c.suit == Suit::Hearts {
            Card { suit: Suit::Spades, rank: c.rank }
        } else {
            c
        });
        trick[heart_seat] = Card { suit: Suit::Hearts, rank: heart_rank };
        prop_assert_eq!(winning_index(&trick), heart_seat);
    }
}
