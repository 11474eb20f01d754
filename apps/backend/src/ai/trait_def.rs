//! AI player trait definition.

use std::fmt;

use crate::domain::{Card, PlayerView};
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// No legal move exists in the current view
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// Trait for AI players.
///
/// Implementations receive the state visible to one seat and must choose
/// from the legal moves that view exposes.
pub trait AiPlayer: Send + Sync {
    /// Choose a bet. Values outside `view.legal_bets()` are accepted by the
    /// engine but recorded as invalid and score nothing.
    fn choose_bet(&self, view: &PlayerView) -> Result<i32, AiError>;

    /// Choose a card from `view.legal_plays()`.
    fn choose_play(&self, view: &PlayerView) -> Result<Card, AiError>;
}
