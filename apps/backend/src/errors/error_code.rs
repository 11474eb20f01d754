//! Error codes for the four-hundred engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that callers
/// (transport adapters, the simulator, logs) can match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Play and bet validation
    /// Card not in hand
    CardNotInHand,
    /// Must follow suit
    MustFollowSuit,
    /// Player already has a card in the current trick
    AlreadyPlayed,
    /// Player already bet this round
    AlreadyBid,
    /// Phase mismatch
    PhaseMismatch,
    /// Parse card error
    ParseCard,
    /// Invalid seat or player not seated at the game
    InvalidSeat,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Join code already exists
    JoinCodeConflict,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Engine invariants
    /// Dealing invoked with a malformed deck
    DeckExhausted,
    /// Trick settlement invoked without four cards in play
    InconsistentTrickState,

    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::AlreadyPlayed => "ALREADY_PLAYED",
            Self::AlreadyBid => "ALREADY_BID",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::ParseCard => "PARSE_CARD",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::JoinCodeConflict => "JOIN_CODE_CONFLICT",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::DeckExhausted => "DECK_EXHAUSTED",
            Self::InconsistentTrickState => "INCONSISTENT_TRICK_STATE",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
