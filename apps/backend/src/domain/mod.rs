//! Domain layer: pure game logic types and helpers. No I/O.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod player_view;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{place_bet, validate_bet, validate_bet_for, Bet, PlaceBetResult};
pub use cards_logic::{card_beats, hand_contains, hand_has_suit};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{build_and_shuffle_deck, deal_hands, full_deck, start_round};
pub use player_view::PlayerView;
pub use rules::valid_bid_range;
pub use scoring::{check_game_over, settle_round, GameOverCheck, SettlementOutcome};
pub use seed_derivation::{
    dealing_rng, derive_bot_seed, derive_dealing_seed, derive_join_code_seed,
};
pub use state::{
    CompletedTrick, Game, GameAggregate, GameId, NewGameIds, Phase, Player, PlayerId, Seat, Team,
    TeamId,
};
pub use tricks::{
    end_trick, is_legal, legal_moves, play_card, resolve_trick, validate_card_play,
    PlayCardResult, TrickOutcome,
};
