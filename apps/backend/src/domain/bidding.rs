use serde::{Deserialize, Serialize};

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{require_phase, require_seat, GameAggregate, Phase, Player, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// A recorded bet. Out-of-range submissions are kept as `Invalid` rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bet {
    Amount(u8),
    Invalid,
}

impl Bet {
    pub fn amount(self) -> Option<u8> {
        match self {
            Bet::Amount(n) => Some(n),
            Bet::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Bet::Amount(_))
    }
}

/// Check a raw bet against a bid floor. Never fails.
pub fn validate_bet(raw: i32, min_bet: u8) -> Bet {
    match u8::try_from(raw) {
        Ok(n) if valid_bid_range(min_bet).contains(&n) => Bet::Amount(n),
        _ => Bet::Invalid,
    }
}

/// `validate_bet` against the player's current floor.
pub fn validate_bet_for(raw: i32, player: &Player) -> Bet {
    validate_bet(raw, player.min_bet)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceBetResult {
    pub bet: Bet,
    /// All four seats have now bid and trick 1 is open.
    pub bidding_closed: bool,
}

/// Record a player's bet for the round.
pub fn place_bet(
    aggregate: &mut GameAggregate,
    player_id: PlayerId,
    raw_bet: i32,
) -> Result<PlaceBetResult, DomainError> {
    require_phase(aggregate, Phase::Bidding, "place_bet")?;
    let seat = require_seat(aggregate, player_id)? as usize;

    if aggregate.players[seat].bet.is_some() {
        return Err(DomainError::validation(
            ValidationKind::AlreadyBid,
            format!("Player {player_id} already bid this round"),
        ));
    }

    let bet = validate_bet_for(raw_bet, &aggregate.players[seat]);
    aggregate.players[seat].bet = Some(bet);

    let bidding_closed = aggregate.players.iter().all(|p| p.bet.is_some());
    if bidding_closed {
        aggregate.game.phase = Phase::TrickPlay { trick_no: 1 };
        aggregate.game.trick_no = Some(1);
    }

    Ok(PlaceBetResult {
        bet,
        bidding_closed,
    })
}
