/// Property-based tests for whole-round consistency.
use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::bidding::place_bet;
use crate::domain::dealing::start_round;
use crate::domain::scoring::settle_round;
use crate::domain::seed_derivation::dealing_rng;
use crate::domain::test_state_helpers::{new_aggregate, IDS};
use crate::domain::tricks::{end_trick, legal_moves, play_card};
use crate::domain::{test_gens, test_prelude, Phase};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a random but legal round keeps 52 cards in circulation, plays
    /// exactly 13 tricks, empties every hand, and settles.
    #[test]
    fn prop_random_round_is_consistent(seed in test_gens::seed()) {
        let mut agg = new_aggregate();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        start_round(&mut agg, &mut dealing_rng(seed, 1)).unwrap();
        prop_assert_eq!(agg.total_cards(), 52);

        for id in IDS {
            place_bet(&mut agg, id, rng.random_range(0..=15)).unwrap();
        }
        prop_assert_eq!(agg.game.phase, Phase::TrickPlay { trick_no: 1 });

        for trick in 1..=13u8 {
            prop_assert_eq!(agg.game.trick_no, Some(trick));
            let starter_seat = agg.seat_of(agg.game.trick_starter_id).unwrap() as usize;
            for offset in 0..4 {
                let seat = (starter_seat + offset) % 4;
                let legal = legal_moves(&agg, &agg.players[seat]);
                let card = *legal.choose(&mut rng).unwrap();
                play_card(&mut agg, IDS[seat], card).unwrap();
                prop_assert_eq!(agg.total_cards(), 52);
            }
            end_trick(&mut agg).unwrap();
            prop_assert_eq!(agg.total_cards(), 52);
        }

        prop_assert_eq!(agg.game.phase, Phase::RoundSettlement);
        prop_assert!(agg.players.iter().all(|p| p.hand.is_empty()));
        prop_assert_eq!(agg.game.completed_tricks.len(), 13);
        prop_assert_eq!(agg.players.iter().map(|p| p.trick_count as u32).sum::<u32>(), 13);

        settle_round(&mut agg).unwrap();
        prop_assert!(matches!(agg.game.phase, Phase::RoundSetup | Phase::GameOver));
    }
}
