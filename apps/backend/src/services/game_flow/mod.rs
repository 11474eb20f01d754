//! Game flow orchestration service - bridges pure domain logic with the repositories.
//!
//! This service provides fine-grained transition methods for game state
//! progression plus `process_game_state`, which auto-advances through trick
//! resolution, settlement and the next deal.

mod mutation;
mod player_actions;
mod round_lifecycle;

use std::sync::Arc;

use crate::config::RulesConfig;
use crate::repos::{GameRepository, PlayerRepository};
use crate::services::game_locks::GameLocks;

/// Game flow service - generic over the repository implementation.
pub struct GameFlowService<R> {
    repo: Arc<R>,
    locks: GameLocks,
    rules: RulesConfig,
}

impl<R> GameFlowService<R>
where
    R: GameRepository + PlayerRepository,
{
    pub fn new(repo: Arc<R>, rules: RulesConfig) -> Self {
        Self {
            repo,
            locks: GameLocks::new(),
            rules,
        }
    }

    pub fn repo(&self) -> &Arc<R> {
        &self.repo
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}

pub use mutation::GameFlowMutationResult;
