//! Game repository interface.

use async_trait::async_trait;

use crate::domain::{Game, GameId, Player};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError>;

    /// Persist `game` with optimistic locking.
    ///
    /// The stored `lock_version` must equal `game.lock_version` (a game not yet
    /// stored must carry version 0). The stored copy, returned, carries
    /// `lock_version + 1`. A mismatch fails with `Conflict(OptimisticLock)`.
    async fn save_game(&self, game: Game) -> Result<Game, DomainError>;

    /// Persist a game together with its players as one unit.
    ///
    /// Same version rule as `save_game`. Either everything is written or,
    /// on a conflict or failure, nothing is.
    async fn save_aggregate(&self, game: Game, players: &[Player]) -> Result<Game, DomainError>;

    async fn delete_game(&self, game_id: GameId) -> Result<(), DomainError>;

    /// Allocate a fresh id for a game, player or team.
    async fn next_id(&self) -> Result<i64, DomainError>;
}

/// Helper to require a game exists.
pub async fn require_game<R>(repo: &R, game_id: GameId) -> Result<Game, DomainError>
where
    R: GameRepository + ?Sized,
{
    repo.find_game(game_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
    })
}
