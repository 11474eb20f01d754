use crate::domain::bidding::{place_bet, validate_bet, Bet};
use crate::domain::test_state_helpers::{new_aggregate, IDS};
use crate::domain::Phase;
use crate::errors::domain::ValidationKind;

fn bidding_aggregate() -> crate::domain::GameAggregate {
    let mut agg = new_aggregate();
    agg.game.round_no = 1;
    agg.game.phase = Phase::Bidding;
    agg
}

#[test]
fn validate_bet_range_is_inclusive() {
    assert_eq!(validate_bet(1, 2), Bet::Invalid);
    assert_eq!(validate_bet(2, 2), Bet::Amount(2));
    assert_eq!(validate_bet(13, 2), Bet::Amount(13));
    assert_eq!(validate_bet(14, 2), Bet::Invalid);
    assert_eq!(validate_bet(-3, 2), Bet::Invalid);
    assert_eq!(validate_bet(300, 2), Bet::Invalid);
}

#[test]
fn validate_bet_respects_raised_floor() {
    assert_eq!(validate_bet(4, 5), Bet::Invalid);
    assert_eq!(validate_bet(5, 5), Bet::Amount(5));
}

#[test]
fn out_of_range_bet_is_recorded_not_rejected() {
    let mut agg = bidding_aggregate();
    let result = place_bet(&mut agg, IDS[0], 1).unwrap();
    assert_eq!(result.bet, Bet::Invalid);
    assert_eq!(agg.players[0].bet, Some(Bet::Invalid));
}

#[test]
fn second_bet_rejected() {
    let mut agg = bidding_aggregate();
    place_bet(&mut agg, IDS[1], 4).unwrap();
    let err = place_bet(&mut agg, IDS[1], 5).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::AlreadyBid));
    assert_eq!(agg.players[1].bet, Some(Bet::Amount(4)));
}

#[test]
fn bidding_closes_after_four_bets_in_any_order() {
    let mut agg = bidding_aggregate();
    for (i, &seat) in [2usize, 0, 3].iter().enumerate() {
        let r = place_bet(&mut agg, IDS[seat], 3 + i as i32).unwrap();
        assert!(!r.bidding_closed);
    }
    let r = place_bet(&mut agg, IDS[1], 2).unwrap();
    assert!(r.bidding_closed);
    assert_eq!(agg.game.phase, Phase::TrickPlay { trick_no: 1 });
    assert_eq!(agg.game.trick_no, Some(1));
}

#[test]
fn bet_outside_bidding_is_phase_mismatch() {
    let mut agg = new_aggregate();
    let before = agg.clone();
    let err = place_bet(&mut agg, IDS[0], 3).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(agg, before);
}

#[test]
fn unknown_player_cannot_bet() {
    let mut agg = bidding_aggregate();
    let err = place_bet(&mut agg, 9999, 3).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidSeat));
}
