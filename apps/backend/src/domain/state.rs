use serde::{Deserialize, Serialize};

use crate::config::rules::RulesConfig;
use crate::domain::bidding::Bet;
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub type GameId = i64;
pub type PlayerId = i64;
pub type TeamId = i64;
pub type Seat = u8; // 0..=3

/// Round lifecycle phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a fresh deal.
    RoundSetup,
    /// Each seat submits one bet, in any order.
    Bidding,
    /// Playing tricks within the round; `trick_no` is 1-based.
    TrickPlay { trick_no: u8 },
    /// All tricks played; scores not yet applied.
    RoundSettlement,
    /// Terminal.
    GameOver,
}

/// A partnership of two seats sharing a win condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub members: [PlayerId; 2],
}

impl Team {
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.members.contains(&player_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub game_id: GameId,
    pub seat: Seat,
    /// Display-sorted after dealing; order carries no gameplay meaning.
    pub hand: Vec<Card>,
    pub card_in_play: Option<Card>,
    /// `None` until the player bids this round.
    pub bet: Option<Bet>,
    pub trick_count: u8,
    /// Unbounded in both directions.
    pub score: i32,
    pub min_bet: u8,
}

impl Player {
    /// Clear per-round fields ahead of a new deal.
    pub fn reset_for_round(&mut self, hand: Vec<Card>) {
        self.hand = hand;
        self.card_in_play = None;
        self.bet = None;
        self.trick_count = 0;
    }
}

/// A resolved trick, kept until the next deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub trick_no: u8,
    pub starter: PlayerId,
    /// Plays in seat order.
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
    pub winning_card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    /// Five uppercase letters.
    pub code: String,
    /// Player ids in fixed seat order.
    pub seats: [PlayerId; PLAYERS],
    pub teams: [Team; 2],
    /// Remaining undealt cards; empty after a successful deal.
    pub deck: Vec<Card>,
    pub trick_starter_id: PlayerId,
    pub round_starter_id: PlayerId,
    pub win_score: i32,
    pub win_score_step: i32,
    /// Reserved for blind passing; the rule engine only advances it.
    pub pass_bet: u8,
    pub over: bool,
    pub phase: Phase,
    /// 1-based; 0 before the first deal.
    pub round_no: u32,
    pub trick_no: Option<u8>,
    pub rng_seed: u64,
    pub completed_tricks: Vec<CompletedTrick>,
    pub winning_team: Option<TeamId>,
    pub lock_version: i32,
}

/// Ids allocated by the repository for a new game.
#[derive(Debug, Clone, Copy)]
pub struct NewGameIds {
    pub game_id: GameId,
    pub player_ids: [PlayerId; PLAYERS],
    pub team_ids: [TeamId; 2],
}

/// A game plus its four players, the unit of loading, mutation and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAggregate {
    pub game: Game,
    /// Seat order.
    pub players: [Player; PLAYERS],
}

impl GameAggregate {
    /// Seat 0 starts the first round; partnerships are seats {0, 2} and {1, 3}.
    pub fn new(
        ids: NewGameIds,
        code: String,
        names: [String; PLAYERS],
        rng_seed: u64,
        rules: &RulesConfig,
    ) -> Self {
        let NewGameIds {
            game_id,
            player_ids,
            team_ids,
        } = ids;
        let teams = [
            Team {
                id: team_ids[0],
                members: [player_ids[0], player_ids[2]],
            },
            Team {
                id: team_ids[1],
                members: [player_ids[1], player_ids[3]],
            },
        ];

        let mut seat: Seat = 0;
        let players = names.map(|name| {
            let id = player_ids[seat as usize];
            let team_id = if teams[0].contains(id) {
                teams[0].id
            } else {
                teams[1].id
            };
            let player = Player {
                id,
                name,
                team_id,
                game_id,
                seat,
                hand: Vec::new(),
                card_in_play: None,
                bet: None,
                trick_count: 0,
                score: 0,
                min_bet: rules.initial_min_bet,
            };
            seat += 1;
            player
        });

        let game = Game {
            id: game_id,
            code,
            seats: player_ids,
            teams,
            deck: Vec::new(),
            trick_starter_id: player_ids[0],
            round_starter_id: player_ids[0],
            win_score: rules.initial_win_score,
            win_score_step: rules.win_score_step,
            pass_bet: rules.initial_pass_bet,
            over: false,
            phase: Phase::RoundSetup,
            round_no: 0,
            trick_no: None,
            rng_seed,
            completed_tricks: Vec::new(),
            winning_team: None,
            lock_version: 0,
        };

        Self { game, players }
    }

    pub fn seat_of(&self, player_id: PlayerId) -> Option<Seat> {
        self.game
            .seats
            .iter()
            .position(|&id| id == player_id)
            .map(|s| s as Seat)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn trick_starter(&self) -> Option<&Player> {
        self.player(self.game.trick_starter_id)
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.game.teams.iter().find(|t| t.id == team_id)
    }

    /// Number of cards currently sitting in play slots.
    pub fn cards_in_play(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.card_in_play.is_some())
            .count()
    }

    /// Cards across deck, hands, play slots and resolved tricks.
    pub fn total_cards(&self) -> usize {
        self.game.deck.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.cards_in_play()
            + self.game.completed_tricks.len() * PLAYERS
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3). Clockwise is positive.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    ((seat as i16 + delta as i16).rem_euclid(PLAYERS as i16)) as Seat
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Helper to require the seat of a player in this game.
pub fn require_seat(aggregate: &GameAggregate, player_id: PlayerId) -> Result<Seat, DomainError> {
    aggregate.seat_of(player_id).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidSeat,
            format!(
                "Player {player_id} is not seated in game {}",
                aggregate.game.id
            ),
        )
    })
}

/// Helper to require the aggregate to be in `expected`.
pub fn require_phase(
    aggregate: &GameAggregate,
    expected: Phase,
    context: &str,
) -> Result<(), DomainError> {
    if aggregate.game.phase != expected {
        return Err(phase_mismatch(aggregate, context));
    }
    Ok(())
}

/// Helper to require trick play, returning the 1-based trick number.
pub fn require_trick_no(aggregate: &GameAggregate, context: &str) -> Result<u8, DomainError> {
    let Phase::TrickPlay { trick_no } = aggregate.game.phase else {
        return Err(phase_mismatch(aggregate, context));
    };
    if aggregate.game.trick_no != Some(trick_no) || !(1..=TRICKS_PER_ROUND).contains(&trick_no) {
        return Err(DomainError::validation_other(format!(
            "Invariant violated in {context}: trick_no {:?} does not match phase trick {trick_no}",
            aggregate.game.trick_no
        )));
    }
    Ok(trick_no)
}

fn phase_mismatch(aggregate: &GameAggregate, context: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::PhaseMismatch,
        format!(
            "{context} not allowed in phase {:?}",
            aggregate.game.phase
        ),
    )
}
