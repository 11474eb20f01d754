use tracing::{debug, info, warn};

use super::GameFlowService;
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::{GameAggregate, GameId, Player};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};
use crate::repos::{require_game, require_player, GameRepository, PlayerRepository};

#[derive(Debug, Clone)]
pub struct GameFlowMutationResult {
    /// State after the mutation. For a finished game this is the final state
    /// even though the records are already deleted.
    pub aggregate: GameAggregate,
    pub old_version: i32,
    pub transitions: Vec<GameTransition>,
}

impl GameFlowMutationResult {
    pub fn final_version(&self) -> i32 {
        self.aggregate.game.lock_version
    }

    /// Whether anything was written.
    pub fn persisted(&self) -> bool {
        self.final_version() != self.old_version
    }
}

impl<R> GameFlowService<R>
where
    R: GameRepository + PlayerRepository,
{
    /// Load → check version → mutate → persist, under the game's lock.
    ///
    /// A closure that leaves the aggregate unchanged writes nothing. A failing
    /// closure writes nothing. Once the game is over its records are deleted.
    pub async fn run_mutation<F>(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
        mutation: F,
    ) -> Result<GameFlowMutationResult, AppError>
    where
        F: FnOnce(&mut GameAggregate) -> Result<Vec<GameTransition>, AppError>,
    {
        let _guard = self.locks.acquire(game_id).await;

        let mut aggregate = self.load_unlocked(game_id).await?;
        let before = GameLifecycleView::from(&aggregate.game);
        let old_version = before.version;

        if let Some(expected) = expected_version {
            if expected != old_version {
                warn!(game_id, expected, actual = old_version, "Stale game version");
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Game lock version mismatch: expected {expected}, but game has version {old_version}"
                    ),
                )
                .into());
            }
        }

        let snapshot = aggregate.clone();
        let mut explicit_transitions = mutation(&mut aggregate)?;
        if aggregate == snapshot {
            debug!(game_id, "Mutation made no changes");
            return Ok(GameFlowMutationResult {
                aggregate,
                old_version,
                transitions: explicit_transitions,
            });
        }

        self.persist_unlocked(&mut aggregate).await?;

        let after = GameLifecycleView::from(&aggregate.game);
        let mut transitions = derive_game_transitions(&before, &after);
        transitions.append(&mut explicit_transitions);

        if aggregate.game.over {
            self.delete_unlocked(&aggregate).await?;
            self.locks.forget(game_id);
            info!(
                game_id,
                winning_team = ?aggregate.game.winning_team,
                "Game over, records deleted"
            );
        }

        Ok(GameFlowMutationResult {
            aggregate,
            old_version,
            transitions,
        })
    }

    /// Load the game and its four players.
    pub async fn load_aggregate(&self, game_id: GameId) -> Result<GameAggregate, AppError> {
        let _guard = self.locks.acquire(game_id).await;
        self.load_unlocked(game_id).await
    }

    async fn load_unlocked(&self, game_id: GameId) -> Result<GameAggregate, AppError> {
        let game = require_game(self.repo.as_ref(), game_id).await?;

        let mut players: Vec<Player> = Vec::with_capacity(game.seats.len());
        for &player_id in &game.seats {
            let player = require_player(self.repo.as_ref(), player_id).await?;
            if player.game_id != game_id {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("Player {player_id} belongs to game {}, not {game_id}", player.game_id),
                )
                .into());
            }
            players.push(player);
        }
        let players: [Player; 4] = players.try_into().map_err(|_: Vec<Player>| {
            AppError::from(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("Game {game_id} does not have four seats"),
            ))
        })?;

        Ok(GameAggregate { game, players })
    }

    /// Game and players go through one repository call, so a version
    /// conflict writes nothing.
    pub(super) async fn persist_unlocked(
        &self,
        aggregate: &mut GameAggregate,
    ) -> Result<(), AppError> {
        aggregate.game = self
            .repo
            .save_aggregate(aggregate.game.clone(), &aggregate.players)
            .await?;
        Ok(())
    }

    async fn delete_unlocked(&self, aggregate: &GameAggregate) -> Result<(), AppError> {
        for player in &aggregate.players {
            self.repo.delete_player(player.id).await?;
        }
        self.repo.delete_game(aggregate.game.id).await?;
        Ok(())
    }
}
