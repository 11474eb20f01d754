use rand::Rng;
use tracing::{debug, info};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::game_transition::GameTransition;
use crate::domain::rules::PLAYERS;
use crate::domain::{
    dealing_rng, end_trick, settle_round, start_round, GameAggregate, GameId, NewGameIds, Phase,
};
use crate::error::AppError;
use crate::repos::{GameRepository, PlayerRepository};
use crate::utils::join_code::generate_join_code;

/// The next step `process_game_state` can take without player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoStep {
    ResolveTrick,
    Settle,
    DealNext,
}

fn next_auto_step(aggregate: &GameAggregate) -> Option<AutoStep> {
    match aggregate.game.phase {
        Phase::TrickPlay { .. } if aggregate.cards_in_play() == PLAYERS => {
            Some(AutoStep::ResolveTrick)
        }
        Phase::RoundSettlement => Some(AutoStep::Settle),
        Phase::RoundSetup if aggregate.game.round_no > 0 => Some(AutoStep::DealNext),
        _ => None,
    }
}

fn deal_round(aggregate: &mut GameAggregate) -> Result<Vec<GameTransition>, AppError> {
    let next_round = aggregate.game.round_no + 1;
    let mut rng = dealing_rng(aggregate.game.rng_seed, next_round);
    start_round(aggregate, &mut rng)?;
    info!(
        game_id = aggregate.game.id,
        round_no = aggregate.game.round_no,
        round_starter = aggregate.game.round_starter_id,
        "Round dealt"
    );
    debug!(game_id = aggregate.game.id, "Transition: -> Bidding");
    Ok(Vec::new())
}

fn resolve_trick(aggregate: &mut GameAggregate) -> Result<Vec<GameTransition>, AppError> {
    let outcome = end_trick(aggregate)?;
    debug!(
        game_id = aggregate.game.id,
        round_no = aggregate.game.round_no,
        trick_no = outcome.trick_no,
        winner = outcome.winner,
        card = %outcome.winning_card,
        "Trick resolved"
    );
    Ok(vec![GameTransition::TrickWon {
        trick_no: outcome.trick_no,
        winner: outcome.winner,
    }])
}

fn settle(aggregate: &mut GameAggregate) -> Result<Vec<GameTransition>, AppError> {
    let outcome = settle_round(aggregate)?;
    info!(
        game_id = aggregate.game.id,
        round_no = aggregate.game.round_no,
        score_deltas = ?outcome.score_deltas,
        min_bets = ?outcome.updated_min_bets,
        pass_bet = outcome.pass_bet,
        win_score = aggregate.game.win_score,
        over = outcome.game_over.over,
        "Round settled"
    );
    Ok(Vec::new())
}

impl<R> GameFlowService<R>
where
    R: GameRepository + PlayerRepository,
{
    /// Create and persist a game for four named players. The game waits in
    /// RoundSetup until `start_round` is called.
    ///
    /// Without a seed one is drawn from the thread RNG; every deal derives from it.
    pub async fn create_game(
        &self,
        names: [String; PLAYERS],
        seed: Option<u64>,
    ) -> Result<GameAggregate, AppError> {
        let game_id = self.repo.next_id().await?;
        let mut player_ids = [0; PLAYERS];
        for id in player_ids.iter_mut() {
            *id = self.repo.next_id().await?;
        }
        let team_ids = [self.repo.next_id().await?, self.repo.next_id().await?];
        let rng_seed = seed.unwrap_or_else(|| rand::rng().random());

        let mut aggregate = GameAggregate::new(
            NewGameIds {
                game_id,
                player_ids,
                team_ids,
            },
            generate_join_code(rng_seed),
            names,
            rng_seed,
            &self.rules,
        );

        let _guard = self.locks.acquire(game_id).await;
        self.persist_unlocked(&mut aggregate).await?;
        info!(
            game_id,
            code = %aggregate.game.code,
            rng_seed,
            win_score = aggregate.game.win_score,
            "Game created"
        );
        Ok(aggregate)
    }

    /// Deal a new round: shuffle, deal 13 cards each and open bidding.
    ///
    /// Uses `dealing_rng(game.rng_seed, round_no)` so deals are reproducible.
    pub async fn start_round(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, deal_round).await
    }

    /// Resolve the current trick once all four cards are in play.
    pub async fn end_trick(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, resolve_trick).await
    }

    /// Apply scoring, bid floors and the game-over rule.
    pub async fn settle_round(
        &self,
        game_id: GameId,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.run_mutation(game_id, expected_version, settle).await
    }

    /// Advance through every step that needs no player input: resolve a full
    /// trick, settle a finished round, deal the next round.
    ///
    /// Each step is its own locked mutation. Stops when the game waits on a
    /// player or is over. Transitions from all steps are merged in order.
    pub async fn process_game_state(
        &self,
        game_id: GameId,
    ) -> Result<GameFlowMutationResult, AppError> {
        let mut merged: Option<GameFlowMutationResult> = None;

        loop {
            let step = self
                .run_mutation(game_id, None, |aggregate| match next_auto_step(aggregate) {
                    Some(AutoStep::ResolveTrick) => resolve_trick(aggregate),
                    Some(AutoStep::Settle) => settle(aggregate),
                    Some(AutoStep::DealNext) => deal_round(aggregate),
                    None => Ok(Vec::new()),
                })
                .await?;

            let progressed = step.persisted();
            let over = step.aggregate.game.over;
            merged = Some(match merged {
                None => step,
                Some(mut acc) => {
                    acc.transitions.extend(step.transitions);
                    acc.aggregate = step.aggregate;
                    acc
                }
            });

            if !progressed || over {
                break;
            }
        }

        merged.ok_or_else(|| AppError::internal("process_game_state made no attempt"))
    }
}
