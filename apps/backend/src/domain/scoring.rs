use crate::domain::bidding::Bet;
use crate::domain::rules::{bid_floor_for_score, PLAYERS};
use crate::domain::state::{require_phase, GameAggregate, Phase, Player, Team, TeamId};
use crate::errors::domain::DomainError;

/// Score change for one player: the bid amount, gained if met and lost if missed.
///
/// An `Invalid` bet, or no bet at all, scores nothing.
pub fn score_delta(bet: Option<Bet>, trick_count: u8) -> i32 {
    match bet {
        Some(Bet::Amount(n)) if trick_count < n => -(n as i32),
        Some(Bet::Amount(n)) => n as i32,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverCheck {
    pub over: bool,
    pub winning_team: Option<TeamId>,
    /// Set when both partnerships reached the threshold together.
    pub escalated_win_score: Option<i32>,
}

/// Evaluate the win condition.
///
/// A team reaches the threshold when either member's score is at least
/// `win_score`. Exactly one team reaching it wins; both reaching it raises the
/// threshold by `step` and play continues.
pub fn check_game_over(
    players: &[Player; PLAYERS],
    teams: &[Team; 2],
    win_score: i32,
    step: i32,
) -> GameOverCheck {
    let reached = |team: &Team| {
        players
            .iter()
            .any(|p| team.contains(p.id) && p.score >= win_score)
    };

    match (reached(&teams[0]), reached(&teams[1])) {
        (true, true) => GameOverCheck {
            over: false,
            winning_team: None,
            escalated_win_score: Some(win_score + step),
        },
        (true, false) => GameOverCheck {
            over: true,
            winning_team: Some(teams[0].id),
            escalated_win_score: None,
        },
        (false, true) => GameOverCheck {
            over: true,
            winning_team: Some(teams[1].id),
            escalated_win_score: None,
        },
        (false, false) => GameOverCheck {
            over: false,
            winning_team: None,
            escalated_win_score: None,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementOutcome {
    /// Seat order.
    pub score_deltas: [i32; PLAYERS],
    pub updated_min_bets: [u8; PLAYERS],
    pub pass_bet: u8,
    pub game_over: GameOverCheck,
}

/// Apply scores, raise bid floors, and decide whether the game is over.
pub fn settle_round(aggregate: &mut GameAggregate) -> Result<SettlementOutcome, DomainError> {
    require_phase(aggregate, Phase::RoundSettlement, "settle_round")?;

    let mut score_deltas = [0; PLAYERS];
    for (delta, player) in score_deltas.iter_mut().zip(aggregate.players.iter_mut()) {
        *delta = score_delta(player.bet, player.trick_count);
        player.score += *delta;
    }

    // Seat order; the last qualifying seat sets the pass bet.
    let mut updated_min_bets = [0; PLAYERS];
    for (min_bet, player) in updated_min_bets.iter_mut().zip(aggregate.players.iter_mut()) {
        if let Some((floor, pass_bet)) = bid_floor_for_score(player.score) {
            player.min_bet = floor;
            aggregate.game.pass_bet = pass_bet;
        }
        *min_bet = player.min_bet;
    }

    let game = &mut aggregate.game;
    let game_over = check_game_over(
        &aggregate.players,
        &game.teams,
        game.win_score,
        game.win_score_step,
    );
    if let Some(raised) = game_over.escalated_win_score {
        game.win_score = raised;
    }
    if game_over.over {
        game.over = true;
        game.winning_team = game_over.winning_team;
        game.phase = Phase::GameOver;
    } else {
        game.phase = Phase::RoundSetup;
    }

    Ok(SettlementOutcome {
        score_deltas,
        updated_min_bets,
        pass_bet: game.pass_bet,
        game_over,
    })
}
