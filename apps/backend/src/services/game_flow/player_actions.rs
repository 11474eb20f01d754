use tracing::{debug, info, warn};

use super::{GameFlowMutationResult, GameFlowService};
use crate::domain::{place_bet, play_card, Card, GameId, PlayerId};
use crate::error::AppError;
use crate::repos::{GameRepository, PlayerRepository};

impl<R> GameFlowService<R>
where
    R: GameRepository + PlayerRepository,
{
    /// Submit a bet for a player in the current round, then auto-advance.
    ///
    /// Out-of-range values are recorded as `Bet::Invalid`, never rejected.
    ///
    /// # Parameters
    /// - `expected_version`: if provided, must match the game's current
    ///   `lock_version` or the call fails with an optimistic-lock conflict.
    pub async fn submit_bet(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        raw_bet: i32,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        debug!(game_id, player_id, raw_bet, "Submitting bet");

        let result = self
            .run_mutation(game_id, expected_version, |aggregate| {
                let placed = place_bet(aggregate, player_id, raw_bet).map_err(|e| {
                    warn!(game_id, player_id, raw_bet, error = %e, "Bet rejected");
                    e
                })?;
                info!(
                    game_id,
                    player_id,
                    round_no = aggregate.game.round_no,
                    bet = ?placed.bet,
                    bidding_closed = placed.bidding_closed,
                    "Bet recorded"
                );
                Ok(Vec::new())
            })
            .await?;

        self.finish_with_processing(game_id, result).await
    }

    /// Play a card for a player in the current trick, then auto-advance
    /// (resolving the trick once it is full).
    ///
    /// Illegal plays fail with `CardNotInHand`, `MustFollowSuit` or
    /// `AlreadyPlayed` and change nothing.
    pub async fn play_card(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        card: Card,
        expected_version: Option<i32>,
    ) -> Result<GameFlowMutationResult, AppError> {
        let result = self
            .run_mutation(game_id, expected_version, |aggregate| {
                let played = play_card(aggregate, player_id, card).map_err(|e| {
                    warn!(game_id, player_id, card = %card, error = %e, "Play rejected");
                    e
                })?;
                debug!(
                    game_id,
                    player_id,
                    round_no = aggregate.game.round_no,
                    trick_no = played.trick_no,
                    card = %card,
                    trick_complete = played.trick_complete,
                    "Card played"
                );
                Ok(Vec::new())
            })
            .await?;

        self.finish_with_processing(game_id, result).await
    }

    async fn finish_with_processing(
        &self,
        game_id: GameId,
        mut result: GameFlowMutationResult,
    ) -> Result<GameFlowMutationResult, AppError> {
        let processed = self.process_game_state(game_id).await?;
        result.transitions.extend(processed.transitions);
        result.aggregate = processed.aggregate;
        Ok(result)
    }
}
