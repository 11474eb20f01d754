//! Random AI player - makes random legal moves.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::{Card, PlayerView};

/// AI that chooses uniformly at random from legal moves.
///
/// The RNG sits behind a `Mutex` because [`AiPlayer`] methods take `&self`.
/// With a seed the choices are reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &str) -> Result<T, AiError> {
        if options.is_empty() {
            return Err(AiError::InvalidMove(format!("No legal {what} available")));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal(format!("Failed to choose random {what}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bet(&self, view: &PlayerView) -> Result<i32, AiError> {
        self.pick(&view.legal_bets(), "bets").map(i32::from)
    }

    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError> {
        self.pick(&view.legal_plays(), "plays")
    }
}
