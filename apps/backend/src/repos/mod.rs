//! Repository traits for the domain layer, plus an in-memory store.
//!
//! Storage is a collaborator: services load a `GameAggregate` through these
//! traits, mutate it with pure domain functions, and write it back.

pub mod games;
pub mod memory;
pub mod players;

pub use games::{require_game, GameRepository};
pub use memory::InMemoryStore;
pub use players::{require_player, PlayerRepository};
