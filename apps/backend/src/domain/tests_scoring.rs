use crate::domain::bidding::Bet;
use crate::domain::scoring::{check_game_over, score_delta, settle_round};
use crate::domain::test_state_helpers::{settlement_aggregate, TEAMS};
use crate::domain::Phase;
use crate::errors::domain::ValidationKind;

const B5: Option<Bet> = Some(Bet::Amount(5));
const B2: Option<Bet> = Some(Bet::Amount(2));

#[test]
fn met_bid_adds_bid_amount() {
    assert_eq!(score_delta(B5, 5), 5);
    // Overtricks still score the bid, not the tricks
    assert_eq!(score_delta(B5, 9), 5);
}

#[test]
fn missed_bid_subtracts_bid_amount() {
    assert_eq!(score_delta(B5, 3), -5);
    assert_eq!(score_delta(B5, 0), -5);
}

#[test]
fn invalid_bet_scores_nothing() {
    assert_eq!(score_delta(Some(Bet::Invalid), 7), 0);
    assert_eq!(score_delta(None, 7), 0);
}

#[test]
fn settlement_applies_score_examples() {
    let mut agg = settlement_aggregate([B5, B5, B2, B2], [5, 3, 2, 3], [20, 20, 0, 0]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.score_deltas, [5, -5, 2, 2]);
    let scores: Vec<i32> = agg.players.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![25, 15, 2, 2]);
    assert_eq!(agg.game.phase, Phase::RoundSetup);
    assert!(!agg.game.over);
}

#[test]
fn scores_can_go_negative() {
    let mut agg = settlement_aggregate([Some(Bet::Amount(13)), B2, B2, B2], [0, 2, 2, 2], [3, 0, 0, 0]);
    settle_round(&mut agg).unwrap();
    assert_eq!(agg.players[0].score, -10);
}

#[test]
fn bid_floor_rises_with_score() {
    // Post-settlement scores: 33, 43, 53, 0
    let mut agg = settlement_aggregate([B2, B2, B2, B2], [0, 0, 0, 2], [35, 45, 55, -2]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.updated_min_bets, [3, 4, 5, 2]);
}

#[test]
fn bid_floor_follows_score_down() {
    let mut agg = settlement_aggregate([B5, B2, B2, B2], [0, 2, 2, 2], [60, 0, 0, 0]);
    agg.players[0].min_bet = 6;
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(agg.players[0].score, 55);
    assert_eq!(outcome.updated_min_bets[0], 5);
    assert_eq!(agg.players[0].min_bet, 5);
    assert_eq!(outcome.pass_bet, 14);
}

#[test]
fn bid_floor_kept_at_or_below_thirty() {
    // 38 - 5 = 33 still sits on the 3 tier; 32 - 5 = 27 leaves the old floor
    let mut agg = settlement_aggregate([B5, B5, B2, B2], [0, 0, 2, 2], [38, 32, 0, 0]);
    agg.players[0].min_bet = 6;
    agg.players[1].min_bet = 3;
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.updated_min_bets[0], 3);
    assert_eq!(outcome.updated_min_bets[1], 3);
}

#[test]
fn pass_bet_follows_last_qualifying_seat() {
    // Seats 1 and 2 end at 35 and 31
    let mut agg = settlement_aggregate([B2, B2, B2, B2], [0, 2, 0, 0], [0, 33, 33, 0]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.pass_bet, 12);

    // A high seat earlier in order is overwritten by a lower one later
    let mut agg = settlement_aggregate([B2, B2, B2, B2], [2, 2, 2, 0], [58, 0, 30, 0]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(agg.players[0].min_bet, 5);
    assert_eq!(agg.players[2].min_bet, 3);
    assert_eq!(outcome.pass_bet, 12);
}

#[test]
fn pass_bet_untouched_below_thresholds() {
    let mut agg = settlement_aggregate([B2, B2, B2, B2], [2, 2, 2, 2], [0, 0, 0, 0]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.pass_bet, 11);
}

#[test]
fn single_team_reaching_threshold_wins() {
    // Team A = seats {0, 2}: scores {42, 10}; team B {5, 5}
    let mut agg = settlement_aggregate([None; 4], [0; 4], [42, 5, 10, 5]);
    let outcome = settle_round(&mut agg).unwrap();
    assert!(outcome.game_over.over);
    assert_eq!(outcome.game_over.winning_team, Some(TEAMS[0]));
    assert_eq!(agg.game.phase, Phase::GameOver);
    assert!(agg.game.over);
    assert_eq!(agg.game.winning_team, Some(TEAMS[0]));
}

#[test]
fn partner_score_can_carry_the_team() {
    let mut agg = settlement_aggregate([None; 4], [0; 4], [0, -20, 3, 41]);
    let outcome = settle_round(&mut agg).unwrap();
    assert_eq!(outcome.game_over.winning_team, Some(TEAMS[1]));
}

#[test]
fn both_teams_reaching_threshold_escalates() {
    let mut agg = settlement_aggregate([None; 4], [0; 4], [45, 41, 0, 0]);
    let outcome = settle_round(&mut agg).unwrap();
    assert!(!outcome.game_over.over);
    assert_eq!(outcome.game_over.escalated_win_score, Some(51));
    assert_eq!(agg.game.win_score, 51);
    assert_eq!(agg.game.phase, Phase::RoundSetup);
    assert!(!agg.game.over);
}

#[test]
fn check_game_over_is_pure() {
    let agg = settlement_aggregate([None; 4], [0; 4], [10, 10, 10, 10]);
    let check = check_game_over(&agg.players, &agg.game.teams, 41, 10);
    assert!(!check.over);
    assert_eq!(check.winning_team, None);
    assert_eq!(check.escalated_win_score, None);

    let check = check_game_over(&agg.players, &agg.game.teams, 10, 10);
    assert_eq!(check.escalated_win_score, Some(20));
}

#[test]
fn settle_outside_settlement_phase_fails() {
    let mut agg = settlement_aggregate([B2; 4], [2; 4], [0; 4]);
    agg.game.phase = Phase::Bidding;
    let before = agg.clone();
    let err = settle_round(&mut agg).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
    assert_eq!(agg, before);
}
