//! Deck construction, shuffling, dealing, and round setup.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS};
use crate::domain::state::{next_seat, require_phase, GameAggregate, Phase, PlayerId};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate a full 52-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// A uniformly shuffled 52-card deck.
pub fn build_and_shuffle_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Deal 13 cards to each of `players` by drawing uniformly at random from `deck`.
///
/// Cards leave the deck as they are drawn, so the deck is empty afterwards.
/// Hands come back in the same order as `players`, each sorted by suit then rank.
pub fn deal_hands<R: Rng + ?Sized>(
    deck: &mut Vec<Card>,
    players: &[PlayerId; PLAYERS],
    rng: &mut R,
) -> Result<Vec<(PlayerId, Vec<Card>)>, DomainError> {
    if deck.len() < DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::DeckExhausted,
            format!(
                "Cannot deal {} cards from a deck of {}",
                PLAYERS * HAND_SIZE,
                deck.len()
            ),
        ));
    }

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for _ in 0..HAND_SIZE {
        for hand in hands.iter_mut() {
            let idx = rng.random_range(0..deck.len());
            hand.push(deck.swap_remove(idx));
        }
    }

    Ok(players
        .iter()
        .zip(hands)
        .map(|(&id, mut hand)| {
            hand.sort();
            (id, hand)
        })
        .collect())
}

/// Deal a fresh round and move to bidding.
///
/// From the second round on the round starter moves one seat clockwise; the
/// trick starter always begins the round at the round starter.
pub fn start_round<R: Rng + ?Sized>(
    aggregate: &mut GameAggregate,
    rng: &mut R,
) -> Result<(), DomainError> {
    require_phase(aggregate, Phase::RoundSetup, "start_round")?;

    let mut deck = build_and_shuffle_deck(rng);
    let dealt = deal_hands(&mut deck, &aggregate.game.seats, rng)?;

    let game = &mut aggregate.game;
    game.round_no += 1;
    if game.round_no > 1 {
        let current = game
            .seats
            .iter()
            .position(|&id| id == game.round_starter_id)
            .unwrap_or(0) as u8;
        game.round_starter_id = game.seats[next_seat(current) as usize];
    }
    game.trick_starter_id = game.round_starter_id;
    game.deck = deck;
    game.completed_tricks.clear();
    game.trick_no = None;
    game.phase = Phase::Bidding;

    for (player, (_, hand)) in aggregate.players.iter_mut().zip(dealt) {
        player.reset_for_round(hand);
    }
    Ok(())
}
