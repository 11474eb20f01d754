//! Plays whole games between bots through the game flow service.

use std::fmt;
use std::sync::Arc;

use four_hundred::ai::{create_ai, AiError, AiPlayer, RandomPlayer};
use four_hundred::domain::game_transition::GameTransition;
use four_hundred::domain::rules::PLAYERS;
use four_hundred::domain::state::next_seat;
use four_hundred::domain::{derive_bot_seed, GameAggregate, Phase, PlayerView, Seat};
use four_hundred::{AppError, GameFlowService, InMemoryStore, RulesConfig};
use tracing::debug;

use crate::output::GameRecord;

const SEAT_NAMES: [&str; PLAYERS] = ["North", "East", "South", "West"];

#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    Ai(Seat, &'static str, AiError),
    /// Engine rejected an action or failed
    App(AppError),
    /// Game reached a state the driver cannot act on
    InvalidState(String),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Ai(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::App(err) => write!(f, "Engine error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<AppError> for SimulatorError {
    fn from(err: AppError) -> Self {
        SimulatorError::App(err)
    }
}

/// One simulated game: a fresh in-memory store, one seeded bot per seat.
pub struct Simulator {
    service: GameFlowService<InMemoryStore>,
    game_seed: u64,
    max_rounds: u32,
    bots: Vec<Box<dyn AiPlayer>>,
}

impl Simulator {
    pub fn new(game_seed: u64, max_rounds: u32) -> Result<Self, SimulatorError> {
        let bots = (0..PLAYERS as Seat)
            .map(|seat| {
                create_ai(RandomPlayer::NAME, Some(derive_bot_seed(game_seed, seat))).ok_or_else(
                    || SimulatorError::InvalidState(format!("no bot for seat {seat}")),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            service: GameFlowService::new(Arc::new(InMemoryStore::new()), RulesConfig::default()),
            game_seed,
            max_rounds,
            bots,
        })
    }

    /// Play until the game ends or `max_rounds` rounds have been dealt.
    pub async fn run(self, game_no: u32) -> Result<GameRecord, SimulatorError> {
        let names = SEAT_NAMES.map(String::from);
        let created = self.service.create_game(names, Some(self.game_seed)).await?;
        let game_id = created.game.id;

        let started = self.service.start_round(game_id, None).await?;
        let mut aggregate = started.aggregate;
        let mut tricks_played = 0u32;

        loop {
            if aggregate.game.over || aggregate.game.round_no > self.max_rounds {
                break;
            }
            let version = Some(aggregate.game.lock_version);

            let result = match aggregate.game.phase {
                Phase::Bidding => {
                    let seat = next_bettor(&aggregate)?;
                    let view = view_for(&aggregate, seat)?;
                    let bet = self.bots[seat as usize]
                        .choose_bet(&view)
                        .map_err(|e| SimulatorError::Ai(seat, "bet", e))?;
                    self.service
                        .submit_bet(game_id, view.player_id, bet, version)
                        .await?
                }
                Phase::TrickPlay { .. } => {
                    let seat = next_to_play(&aggregate)?;
                    let view = view_for(&aggregate, seat)?;
                    let card = self.bots[seat as usize]
                        .choose_play(&view)
                        .map_err(|e| SimulatorError::Ai(seat, "play", e))?;
                    self.service
                        .play_card(game_id, view.player_id, card, version)
                        .await?
                }
                other => {
                    return Err(SimulatorError::InvalidState(format!(
                        "game {game_id} stalled in {other:?}"
                    )));
                }
            };

            tricks_played += result
                .transitions
                .iter()
                .filter(|t| matches!(t, GameTransition::TrickWon { .. }))
                .count() as u32;
            aggregate = result.aggregate;
        }

        debug!(
            game_no,
            game_id,
            rounds = aggregate.game.round_no,
            over = aggregate.game.over,
            "Game finished"
        );
        Ok(GameRecord::from_aggregate(
            game_no,
            self.game_seed,
            tricks_played,
            &aggregate,
        ))
    }
}

fn view_for(aggregate: &GameAggregate, seat: Seat) -> Result<PlayerView, SimulatorError> {
    let player_id = aggregate.game.seats[seat as usize];
    PlayerView::for_player(aggregate, player_id).map_err(|e| AppError::from(e).into())
}

/// Bets are collected in seat order from the round starter.
fn next_bettor(aggregate: &GameAggregate) -> Result<Seat, SimulatorError> {
    let start = aggregate
        .seat_of(aggregate.game.round_starter_id)
        .ok_or_else(|| SimulatorError::InvalidState("round starter is not seated".into()))?;
    seats_from(start)
        .find(|&seat| aggregate.players[seat as usize].bet.is_none())
        .ok_or_else(|| SimulatorError::InvalidState("bidding open but everyone has bet".into()))
}

/// Cards are played in seat order from the trick starter.
fn next_to_play(aggregate: &GameAggregate) -> Result<Seat, SimulatorError> {
    let start = aggregate
        .seat_of(aggregate.game.trick_starter_id)
        .ok_or_else(|| SimulatorError::InvalidState("trick starter is not seated".into()))?;
    seats_from(start)
        .find(|&seat| aggregate.players[seat as usize].card_in_play.is_none())
        .ok_or_else(|| SimulatorError::InvalidState("trick full but unresolved".into()))
}

fn seats_from(start: Seat) -> impl Iterator<Item = Seat> {
    std::iter::successors(Some(start), |&s| Some(next_seat(s))).take(PLAYERS)
}
