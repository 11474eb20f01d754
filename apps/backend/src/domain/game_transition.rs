// apps/backend/src/domain/game_transition.rs

use crate::domain::state::{Game, Phase, PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: i32,
    pub phase: Phase,
    pub round_no: u32,
    pub win_score: i32,
    pub over: bool,
    pub winning_team: Option<TeamId>,
}

impl From<&Game> for GameLifecycleView {
    fn from(game: &Game) -> Self {
        Self {
            version: game.lock_version,
            phase: game.phase,
            round_no: game.round_no,
            win_score: game.win_score,
            over: game.over,
            winning_team: game.winning_team,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_no: u32 },

    /// Edge-triggered: every seat has bid and trick 1 is open.
    BiddingClosed { round_no: u32 },

    /// Explicit: a trick was resolved.
    TrickWon { trick_no: u8, winner: PlayerId },

    /// Edge-triggered: scores were applied for the round.
    RoundSettled { round_no: u32 },

    /// Edge-triggered: both partnerships reached the threshold together.
    WinScoreRaised { from: i32, to: i32 },

    /// Edge-triggered: the game reached GameOver.
    GameEnded { winning_team: Option<TeamId> },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Settlement (RoundSettlement -> anything else)
    if before.phase == Phase::RoundSettlement && after.phase != Phase::RoundSettlement {
        transitions.push(GameTransition::RoundSettled {
            round_no: before.round_no,
        });
    }

    // 2. Threshold escalation
    if after.win_score > before.win_score {
        transitions.push(GameTransition::WinScoreRaised {
            from: before.win_score,
            to: after.win_score,
        });
    }

    // 3. Game end
    if !before.over && after.over {
        transitions.push(GameTransition::GameEnded {
            winning_team: after.winning_team,
        });
    }

    // 4. New deal
    if after.round_no > before.round_no {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 5. Bidding closed
    if before.phase == Phase::Bidding && matches!(after.phase, Phase::TrickPlay { .. }) {
        transitions.push(GameTransition::BiddingClosed {
            round_no: after.round_no,
        });
    }

    transitions
}
