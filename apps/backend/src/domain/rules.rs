use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 52;
pub const HAND_SIZE: usize = 13;
/// Tricks per round; every card in a hand is played.
pub const TRICKS_PER_ROUND: u8 = 13;

pub const MAX_BET: u8 = 13;
pub const INITIAL_MIN_BET: u8 = 2;
pub const INITIAL_WIN_SCORE: i32 = 41;
/// Added to the win score when both partnerships reach it together.
pub const WIN_SCORE_STEP: i32 = 10;
pub const INITIAL_PASS_BET: u8 = 11;

/// Bid-floor ladder: (score strictly above, min bet, pass bet), highest first.
pub const BID_FLOOR_LADDER: [(i32, u8, u8); 4] = [(60, 6, 15), (50, 5, 14), (40, 4, 13), (30, 3, 12)];

/// Legal bets for a player whose floor is `min_bet`.
pub fn valid_bid_range(min_bet: u8) -> RangeInclusive<u8> {
    min_bet..=MAX_BET
}

/// New (min bet, pass bet) for a settled score, or None when the score is 30 or below.
pub fn bid_floor_for_score(score: i32) -> Option<(u8, u8)> {
    BID_FLOOR_LADDER
        .iter()
        .find(|(above, _, _)| score > *above)
        .map(|&(_, min_bet, pass_bet)| (min_bet, pass_bet))
}
