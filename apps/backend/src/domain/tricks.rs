use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{
    require_seat, require_trick_no, CompletedTrick, GameAggregate, Phase, Player, PlayerId,
};
use crate::domain::{card_beats, hand_contains, hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCardResult {
    pub trick_no: u8,
    /// All four seats now have a card in play.
    pub trick_complete: bool,
}

/// Result of resolving a full trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickOutcome {
    pub trick_no: u8,
    pub winner: PlayerId,
    pub winning_card: Card,
    /// The last trick of the round was just resolved.
    pub round_complete: bool,
}

/// Suit of the trick starter's card in play, if they have played.
pub fn led_suit(aggregate: &GameAggregate) -> Option<Suit> {
    aggregate
        .trick_starter()
        .and_then(|p| p.card_in_play)
        .map(|c| c.suit)
}

/// Check a proposed play without mutating anything.
pub fn validate_card_play(
    card: Card,
    aggregate: &GameAggregate,
    player: &Player,
) -> Result<(), DomainError> {
    if !hand_contains(&player.hand, card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} is not in {}'s hand", player.name),
        ));
    }
    if player.id == aggregate.game.trick_starter_id {
        return Ok(());
    }
    let Some(lead) = led_suit(aggregate) else {
        return Ok(());
    };
    if card.suit == lead || !hand_has_suit(&player.hand, lead) {
        return Ok(());
    }
    Err(DomainError::validation(
        ValidationKind::MustFollowSuit,
        format!("Must follow {lead}"),
    ))
}

pub fn is_legal(card: Card, aggregate: &GameAggregate, player: &Player) -> bool {
    validate_card_play(card, aggregate, player).is_ok()
}

/// Cards `player` may legally play right now, display-sorted.
pub fn legal_moves(aggregate: &GameAggregate, player: &Player) -> Vec<Card> {
    let mut legal: Vec<Card> = player
        .hand
        .iter()
        .copied()
        .filter(|&c| is_legal(c, aggregate, player))
        .collect();
    legal.sort();
    legal
}

/// Index of the winning card among four cards given in seat order.
pub fn winning_index(cards: &[Card; PLAYERS]) -> usize {
    let mut best = 0;
    for (i, &card) in cards.iter().enumerate().skip(1) {
        if card_beats(card, cards[best]) {
            best = i;
        }
    }
    best
}

/// Winning card of a trick. Cards must be given in seat order.
pub fn resolve_trick(cards: &[Card; PLAYERS]) -> Card {
    cards[winning_index(cards)]
}

/// Validate and place a card into the current trick.
///
/// Illegal plays leave the hand untouched. Turn order is not enforced.
pub fn play_card(
    aggregate: &mut GameAggregate,
    player_id: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let trick_no = require_trick_no(aggregate, "play_card")?;
    let seat = require_seat(aggregate, player_id)? as usize;

    let player = &aggregate.players[seat];
    if player.card_in_play.is_some() {
        return Err(DomainError::validation(
            ValidationKind::AlreadyPlayed,
            format!("Player {player_id} already played in trick {trick_no}"),
        ));
    }
    validate_card_play(card, aggregate, player)?;

    let player = &mut aggregate.players[seat];
    player.hand.retain(|&c| c != card);
    player.card_in_play = Some(card);

    Ok(PlayCardResult {
        trick_no,
        trick_complete: aggregate.cards_in_play() == PLAYERS,
    })
}

/// Resolve a full trick: credit the winner, make them the next starter, and
/// move the four cards out of play.
pub fn end_trick(aggregate: &mut GameAggregate) -> Result<TrickOutcome, DomainError> {
    let trick_no = require_trick_no(aggregate, "end_trick")?;

    let mut cards = Vec::with_capacity(PLAYERS);
    for p in &aggregate.players {
        let Some(card) = p.card_in_play else {
            return Err(DomainError::validation(
                ValidationKind::InconsistentTrickState,
                format!(
                    "Trick {trick_no} has {} of {PLAYERS} cards in play",
                    aggregate.cards_in_play()
                ),
            ));
        };
        cards.push(card);
    }
    let cards: [Card; PLAYERS] = [cards[0], cards[1], cards[2], cards[3]];

    let winner_seat = winning_index(&cards);
    let winner = aggregate.players[winner_seat].id;
    let winning_card = cards[winner_seat];
    let starter = aggregate.game.trick_starter_id;

    aggregate.players[winner_seat].trick_count += 1;
    let plays = aggregate
        .players
        .iter_mut()
        .filter_map(|p| p.card_in_play.take().map(|c| (p.id, c)))
        .collect();

    let game = &mut aggregate.game;
    game.completed_tricks.push(CompletedTrick {
        trick_no,
        starter,
        plays,
        winner,
        winning_card,
    });
    game.trick_starter_id = winner;

    let round_complete = trick_no >= TRICKS_PER_ROUND;
    if round_complete {
        game.phase = Phase::RoundSettlement;
        game.trick_no = None;
    } else {
        game.phase = Phase::TrickPlay {
            trick_no: trick_no + 1,
        };
        game.trick_no = Some(trick_no + 1);
    }

    Ok(TrickOutcome {
        trick_no,
        winner,
        winning_card,
        round_complete,
    })
}
