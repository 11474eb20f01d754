//! Player repository interface.

use async_trait::async_trait;

use crate::domain::{Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};

#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError>;

    async fn save_player(&self, player: Player) -> Result<Player, DomainError>;

    async fn delete_player(&self, player_id: PlayerId) -> Result<(), DomainError>;
}

/// Helper to require a player exists.
pub async fn require_player<R>(repo: &R, player_id: PlayerId) -> Result<Player, DomainError>
where
    R: PlayerRepository + ?Sized,
{
    repo.find_player(player_id).await?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {player_id} not found"),
        )
    })
}
