//! Per-game async locks.
//!
//! Every read-modify-write on a game aggregate holds that game's guard from
//! load to persist. Different games never share a lock.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::domain::GameId;

#[derive(Debug, Default)]
pub struct GameLocks {
    locks: DashMap<GameId, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the guard for `game_id`, waiting behind any current writer.
    pub async fn acquire(&self, game_id: GameId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();

        match lock.clone().try_lock_owned() {
            Ok(guard) => guard,
            Err(_) => {
                debug!(game_id, "Waiting for game lock");
                lock.lock_owned().await
            }
        }
    }

    /// Drop the lock entry for a finished game.
    pub fn forget(&self, game_id: GameId) {
        self.locks.remove(&game_id);
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
