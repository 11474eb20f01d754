//! Automated players.
//!
//! - [`AiPlayer`]: the decision trait, fed a [`PlayerView`](crate::domain::PlayerView)
//! - [`RandomPlayer`]: uniform choice over legal moves, seedable for tests

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by name. Returns None if the name is unrecognized.
pub fn create_ai(ai_type: &str, seed: Option<u64>) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        RandomPlayer::NAME | "random" => Some(Box::new(RandomPlayer::new(seed))),
        _ => None,
    }
}
