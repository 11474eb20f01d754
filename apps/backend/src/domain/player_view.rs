//! Player view of game state: what one seat can see at a decision point.

use crate::domain::rules::{valid_bid_range, PLAYERS};
use crate::domain::state::{require_seat, GameAggregate, Phase, PlayerId, Seat};
use crate::domain::tricks::{led_suit, legal_moves};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Information visible to a player at a decision point for the current round.
///
/// This is the interface between the engine and bot players. Use
/// [`legal_bets`](Self::legal_bets) and [`legal_plays`](Self::legal_plays)
/// instead of re-deriving the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerView {
    pub game_id: i64,
    pub player_id: PlayerId,
    pub seat: Seat,
    pub phase: Phase,
    pub round_no: u32,
    pub trick_no: Option<u8>,
    pub hand: Vec<Card>,
    pub min_bet: u8,
    pub is_trick_starter: bool,
    pub led_suit: Option<Suit>,
    /// Cards currently in play, by seat.
    pub cards_in_play: [Option<Card>; PLAYERS],
    /// Cumulative scores, by seat.
    pub scores: [i32; PLAYERS],
    pub win_score: i32,
    legal: Vec<Card>,
}

impl PlayerView {
    pub fn for_player(aggregate: &GameAggregate, player_id: PlayerId) -> Result<Self, DomainError> {
        let seat = require_seat(aggregate, player_id)?;
        let player = &aggregate.players[seat as usize];
        let legal = match aggregate.game.phase {
            Phase::TrickPlay { .. } if player.card_in_play.is_none() => {
                legal_moves(aggregate, player)
            }
            _ => Vec::new(),
        };

        Ok(Self {
            game_id: aggregate.game.id,
            player_id,
            seat,
            phase: aggregate.game.phase,
            round_no: aggregate.game.round_no,
            trick_no: aggregate.game.trick_no,
            hand: player.hand.clone(),
            min_bet: player.min_bet,
            is_trick_starter: aggregate.game.trick_starter_id == player_id,
            led_suit: led_suit(aggregate),
            cards_in_play: aggregate.players.each_ref().map(|p| p.card_in_play),
            scores: aggregate.players.each_ref().map(|p| p.score),
            win_score: aggregate.game.win_score,
            legal,
        })
    }

    /// Bets inside the player's current range. Empty outside bidding.
    pub fn legal_bets(&self) -> Vec<u8> {
        if self.phase != Phase::Bidding {
            return Vec::new();
        }
        valid_bid_range(self.min_bet).collect()
    }

    /// Cards this seat may play now. Empty outside trick play or once the seat has played.
    pub fn legal_plays(&self) -> Vec<Card> {
        self.legal.clone()
    }
}
