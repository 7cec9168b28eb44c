use std::sync::Arc;

use crate::{
    errors::AppResult,
    gateways::ActivityGateway,
    models::{
        domain::{MatchOutcome, PhonicsMatch, SessionContext},
        dto::ActivityProgressRequest,
    },
    services::clock::{elapsed_seconds, minutes_played, Clock},
};

pub struct PhonicsMatchService {
    gateway: Arc<dyn ActivityGateway>,
    clock: Arc<dyn Clock>,
}

impl PhonicsMatchService {
    pub fn new(gateway: Arc<dyn ActivityGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    pub fn new_game(&self) -> AppResult<PhonicsMatch> {
        let game = PhonicsMatch::standard(self.clock.now())?;
        log::info!("Phonics match started with {} rounds", game.round_count());
        Ok(game)
    }

    /// Applies a pick. Finishing the last round of a planned activity reports
    /// progress; a failed report is logged and the game still counts as done.
    pub async fn choose(
        &self,
        game: &mut PhonicsMatch,
        option_id: &str,
        context: &SessionContext,
        activity_id: Option<i64>,
    ) -> AppResult<MatchOutcome> {
        let outcome = game.choose(option_id)?;

        if let MatchOutcome::Completed { final_score } = outcome {
            log::info!(
                "Phonics match completed by child {} with score {}",
                context.child_id,
                final_score
            );
            if let Some(activity_id) = activity_id {
                let minutes = minutes_played(elapsed_seconds(game.started_at, self.clock.now()));
                let request = ActivityProgressRequest::completed(
                    context.child_id,
                    activity_id,
                    minutes,
                    final_score,
                );
                if let Err(err) = self.gateway.record_progress(&request).await {
                    log::error!("Failed to save phonics match progress: {}", err);
                }
            }
        }

        Ok(outcome)
    }
}
