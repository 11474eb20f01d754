//! Service layer: per-game single-writer orchestration over the repositories.

pub mod game_flow;
pub mod game_locks;

pub use game_flow::{GameFlowMutationResult, GameFlowService};
pub use game_locks::GameLocks;
