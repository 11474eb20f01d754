//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every random choice in a game flows from the game's `rng_seed`. Each context
//! (dealing a round, a bot's decisions) derives its own seed so that replaying
//! a game with the same seed reproduces every deal.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Derive a seed for dealing cards in a round.
///
/// Unique per (game, round) combination.
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive a seed for a bot seated at `seat`.
pub fn derive_bot_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}

/// Derive the seed a game's join code is drawn from.
pub fn derive_join_code_seed(game_seed: u64) -> u64 {
    game_seed.wrapping_add(3)
}

/// Deterministic RNG used to shuffle and deal `round_no`.
pub fn dealing_rng(game_seed: u64, round_no: u32) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(derive_dealing_seed(game_seed, round_no))
}
