//! Join code generation for games.
//!
//! Join codes are five uppercase ASCII letters drawn from a seeded RNG, so a
//! game created with a fixed seed always gets the same code.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::domain::derive_join_code_seed;

pub const JOIN_CODE_LEN: usize = 5;

/// Join code for the game seeded with `game_seed`.
pub fn generate_join_code(game_seed: u64) -> String {
    let mut rng = ChaCha20Rng::seed_from_u64(derive_join_code_seed(game_seed));
    generate_join_code_with(&mut rng)
}

pub fn generate_join_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..JOIN_CODE_LEN)
        .map(|_| rng.random_range(b'A'..=b'Z') as char)
        .collect()
}
