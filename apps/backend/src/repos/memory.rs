//! In-memory repository used by tests and the simulator.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::warn;

use super::games::GameRepository;
use super::players::PlayerRepository;
use crate::domain::{Game, GameId, Player, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError};

/// Concurrent map-backed store for games and players.
#[derive(Debug)]
pub struct InMemoryStore {
    games: DashMap<GameId, Game>,
    players: DashMap<PlayerId, Player>,
    next_id: AtomicI64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            players: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Version-check and store `game`, running `write_dependents` only once
    /// the check has passed and while the game's entry is still held.
    fn commit_game<F>(&self, mut game: Game, write_dependents: F) -> Result<Game, DomainError>
    where
        F: FnOnce(),
    {
        let game_id = game.id;
        match self.games.entry(game_id) {
            Entry::Occupied(mut occupied) => {
                let stored = occupied.get().lock_version;
                if stored != game.lock_version {
                    return Err(lock_conflict(game_id, game.lock_version, stored));
                }
                game.lock_version = stored + 1;
                write_dependents();
                occupied.insert(game.clone());
            }
            Entry::Vacant(vacant) => {
                if game.lock_version != 0 {
                    return Err(lock_conflict(game_id, game.lock_version, 0));
                }
                game.lock_version = 1;
                write_dependents();
                vacant.insert(game.clone());
            }
        }
        Ok(game)
    }
}

fn lock_conflict(game_id: GameId, expected: i32, actual: i32) -> DomainError {
    warn!(game_id, expected, actual, "Optimistic lock conflict");
    DomainError::conflict(
        ConflictKind::OptimisticLock,
        format!("Game lock version mismatch: expected {expected}, but game has version {actual}"),
    )
}

#[async_trait]
impl GameRepository for InMemoryStore {
    async fn find_game(&self, game_id: GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(&game_id).map(|g| g.value().clone()))
    }

    async fn save_game(&self, game: Game) -> Result<Game, DomainError> {
        self.commit_game(game, || {})
    }

    async fn save_aggregate(&self, game: Game, players: &[Player]) -> Result<Game, DomainError> {
        self.commit_game(game, || {
            for player in players {
                self.players.insert(player.id, player.clone());
            }
        })
    }

    async fn delete_game(&self, game_id: GameId) -> Result<(), DomainError> {
        self.games.remove(&game_id);
        Ok(())
    }

    async fn next_id(&self) -> Result<i64, DomainError> {
        Ok(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn find_player(&self, player_id: PlayerId) -> Result<Option<Player>, DomainError> {
        Ok(self.players.get(&player_id).map(|p| p.value().clone()))
    }

    async fn save_player(&self, player: Player) -> Result<Player, DomainError> {
        self.players.insert(player.id, player.clone());
        Ok(player)
    }

    async fn delete_player(&self, player_id: PlayerId) -> Result<(), DomainError> {
        self.players.remove(&player_id);
        Ok(())
    }
}
