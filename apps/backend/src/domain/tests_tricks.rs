use crate::domain::test_state_helpers::{trick_aggregate, IDS};
use crate::domain::tricks::{
    end_trick, is_legal, legal_moves, play_card, resolve_trick, validate_card_play,
};
use crate::domain::{try_parse_cards, Card, Phase};
use crate::errors::domain::ValidationKind;

fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens.iter().copied()).expect("hardcoded valid card tokens")
}

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn cards4(tokens: [&str; 4]) -> [Card; 4] {
    tokens.map(card)
}

fn sample_hands() -> [Vec<Card>; 4] {
    [
        parse_cards(&["AS", "KH", "2C"]),
        parse_cards(&["TS", "3H", "4C"]),
        parse_cards(&["QS", "5D", "6C"]),
        parse_cards(&["9D", "7H", "8C"]),
    ]
}

#[test]
fn resolve_trick_sole_heart_wins_outright() {
    assert_eq!(resolve_trick(&cards4(["9H", "AS", "2C", "KD"])), card("9H"));
    assert_eq!(resolve_trick(&cards4(["AS", "KD", "QC", "2H"])), card("2H"));
}

#[test]
fn resolve_trick_highest_heart_wins() {
    assert_eq!(resolve_trick(&cards4(["9H", "TH", "2C", "KD"])), card("TH"));
    assert_eq!(resolve_trick(&cards4(["AH", "TH", "AS", "KH"])), card("AH"));
}

#[test]
fn resolve_trick_without_hearts_ignores_led_suit() {
    assert_eq!(resolve_trick(&cards4(["AS", "2C", "KD", "QD"])), card("AS"));
    // Led clubs, but the king of diamonds still wins
    assert_eq!(resolve_trick(&cards4(["2C", "KD", "5C", "QS"])), card("KD"));
}

#[test]
fn resolve_trick_first_seen_keeps_rank_ties() {
    assert_eq!(resolve_trick(&cards4(["AS", "AD", "AC", "2D"])), card("AS"));
    assert_eq!(resolve_trick(&cards4(["2C", "KD", "KS", "KC"])), card("KD"));
}

#[test]
fn starter_may_play_anything() {
    let agg = trick_aggregate(sample_hands(), 0, 1);
    let starter = &agg.players[0];
    assert_eq!(legal_moves(&agg, starter).len(), 3);
}

#[test]
fn non_starter_before_lead_may_play_anything() {
    let agg = trick_aggregate(sample_hands(), 0, 1);
    let p1 = &agg.players[1];
    assert!(is_legal(card("3H"), &agg, p1));
    assert!(is_legal(card("TS"), &agg, p1));
}

#[test]
fn must_follow_led_suit_when_held() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    play_card(&mut agg, IDS[0], card("AS")).unwrap();

    let p1 = &agg.players[1];
    assert_eq!(legal_moves(&agg, p1), vec![card("TS")]);
    let err = validate_card_play(card("3H"), &agg, p1).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::MustFollowSuit));

    // Seat 3 is void in spades: anything goes
    let p3 = &agg.players[3];
    assert_eq!(legal_moves(&agg, p3).len(), 3);
}

#[test]
fn card_not_in_hand_checked_first() {
    let agg = trick_aggregate(sample_hands(), 0, 1);
    let err = validate_card_play(card("AH"), &agg, &agg.players[0]).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::CardNotInHand));
}

#[test]
fn illegal_play_leaves_hand_unchanged() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    play_card(&mut agg, IDS[0], card("AS")).unwrap();
    let before = agg.clone();

    let err = play_card(&mut agg, IDS[1], card("4C")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::MustFollowSuit));
    assert_eq!(agg, before);
}

#[test]
fn second_card_in_same_trick_rejected() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    play_card(&mut agg, IDS[0], card("2C")).unwrap();
    let err = play_card(&mut agg, IDS[0], card("AS")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::AlreadyPlayed));
    assert_eq!(agg.players[0].hand.len(), 2);
}

#[test]
fn play_card_outside_trick_play_is_phase_mismatch() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    agg.game.phase = Phase::Bidding;
    agg.game.trick_no = None;
    let err = play_card(&mut agg, IDS[0], card("AS")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn full_trick_resolves_and_winner_starts_next() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    let r = play_card(&mut agg, IDS[0], card("AS")).unwrap();
    assert!(!r.trick_complete);
    play_card(&mut agg, IDS[1], card("TS")).unwrap();
    play_card(&mut agg, IDS[2], card("QS")).unwrap();
    let r = play_card(&mut agg, IDS[3], card("7H")).unwrap();
    assert!(r.trick_complete);

    let outcome = end_trick(&mut agg).unwrap();
    assert_eq!(outcome.trick_no, 1);
    assert_eq!(outcome.winner, IDS[3]);
    assert_eq!(outcome.winning_card, card("7H"));
    assert!(!outcome.round_complete);

    assert_eq!(agg.players[3].trick_count, 1);
    assert_eq!(agg.game.trick_starter_id, IDS[3]);
    assert_eq!(agg.game.phase, Phase::TrickPlay { trick_no: 2 });
    assert_eq!(agg.game.trick_no, Some(2));
    assert!(agg.players.iter().all(|p| p.card_in_play.is_none()));
    assert_eq!(agg.game.completed_tricks.len(), 1);
    assert_eq!(agg.game.completed_tricks[0].starter, IDS[0]);
}

#[test]
fn end_trick_requires_four_cards() {
    let mut agg = trick_aggregate(sample_hands(), 0, 1);
    play_card(&mut agg, IDS[0], card("AS")).unwrap();
    play_card(&mut agg, IDS[1], card("TS")).unwrap();
    let before = agg.clone();
    let err = end_trick(&mut agg).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(&ValidationKind::InconsistentTrickState)
    );
    assert_eq!(agg, before);
}

#[test]
fn last_trick_moves_to_settlement() {
    let hands = [
        parse_cards(&["2C"]),
        parse_cards(&["3C"]),
        parse_cards(&["4C"]),
        parse_cards(&["5C"]),
    ];
    let mut agg = trick_aggregate(hands, 2, 13);
    for (id, tok) in IDS.iter().zip(["2C", "3C", "4C", "5C"]) {
        play_card(&mut agg, *id, card(tok)).unwrap();
    }
    let outcome = end_trick(&mut agg).unwrap();
    assert!(outcome.round_complete);
    assert_eq!(outcome.winner, IDS[3]);
    assert_eq!(agg.game.phase, Phase::RoundSettlement);
    assert_eq!(agg.game.trick_no, None);
    assert!(agg.players.iter().all(|p| p.hand.is_empty()));
}
