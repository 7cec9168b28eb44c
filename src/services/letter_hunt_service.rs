use rand::Rng;
use std::sync::Arc;

use crate::{
    gateways::ActivityGateway,
    models::{
        domain::{LetterHunt, PickOutcome, SessionContext},
        dto::ActivityProgressRequest,
    },
    services::clock::{elapsed_seconds, minutes_played, Clock},
};

pub struct LetterHuntService {
    gateway: Arc<dyn ActivityGateway>,
    clock: Arc<dyn Clock>,
}

impl LetterHuntService {
    pub fn new(gateway: Arc<dyn ActivityGateway>, clock: Arc<dyn Clock>) -> Self {
        Self { gateway, clock }
    }

    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> LetterHunt {
        let game = LetterHunt::generate(rng, self.clock.now());
        log::info!("Letter hunt started, target letter {}", game.target);
        game
    }

    /// Applies a tile pick. A win is reported to the API when the game was
    /// launched from a planned activity; a failed report does not undo the win.
    pub async fn pick(
        &self,
        game: &mut LetterHunt,
        tile_id: usize,
        context: &SessionContext,
        activity_id: Option<i64>,
    ) -> PickOutcome {
        let now = self.clock.now();
        let outcome = game.pick(tile_id, now);

        if let PickOutcome::Won { final_score } = outcome {
            log::info!(
                "Letter hunt won by child {} with score {}",
                context.child_id,
                final_score
            );
            if let Some(activity_id) = activity_id {
                let minutes = minutes_played(elapsed_seconds(game.started_at, now));
                let request = ActivityProgressRequest::completed(
                    context.child_id,
                    activity_id,
                    minutes,
                    final_score,
                );
                if let Err(err) = self.gateway.record_progress(&request).await {
                    log::error!("Failed to save letter hunt progress: {}", err);
                }
            }
        }

        outcome
    }
}
