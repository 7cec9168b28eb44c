use std::sync::Arc;
use std::time::Duration;

use crate::{
    errors::{AppError, AppResult},
    gateways::SubmissionGateway,
    models::{domain::AssessmentResult, dto::SubmissionPayload},
    services::quiz_controller::{AnswerOutcome, QuizController},
};

pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Something went wrong saving your results. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Advanced { index: usize },
    Completed(AssessmentResult),
    /// The last question is open again; answering it or calling
    /// [`AssessmentService::retry`] resubmits.
    Failed { message: String, error: AppError },
}

/// Drives a [`QuizController`] against the remote analyzer, bounding each
/// submission by a timeout.
pub struct AssessmentService {
    gateway: Arc<dyn SubmissionGateway>,
    submit_timeout: Duration,
}

impl AssessmentService {
    pub fn new(gateway: Arc<dyn SubmissionGateway>, submit_timeout: Duration) -> Self {
        Self {
            gateway,
            submit_timeout,
        }
    }

    pub fn submit_timeout(&self) -> Duration {
        self.submit_timeout
    }

    /// Records an answer and, on the last question, submits the quiz.
    ///
    /// Returns `Err` only for answers the controller rejects. Submission
    /// problems come back as [`SubmissionOutcome::Failed`].
    pub async fn answer(
        &self,
        controller: &mut QuizController,
        option_id: &str,
    ) -> AppResult<SubmissionOutcome> {
        match controller.answer(option_id)? {
            AnswerOutcome::Advanced { index } => Ok(SubmissionOutcome::Advanced { index }),
            AnswerOutcome::ReadyToSubmit(payload) => Ok(self.submit(controller, payload).await),
        }
    }

    pub async fn retry(&self, controller: &mut QuizController) -> AppResult<SubmissionOutcome> {
        let payload = controller.retry_submission()?;
        Ok(self.submit(controller, payload).await)
    }

    async fn submit(
        &self,
        controller: &mut QuizController,
        payload: SubmissionPayload,
    ) -> SubmissionOutcome {
        let sent = tokio::time::timeout(
            self.submit_timeout,
            self.gateway.submit_assessment(&payload),
        )
        .await;

        let outcome = match sent {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(err)) => Err(err),
            Err(_) => Err(AppError::SubmissionTimeout(self.submit_timeout.as_secs())),
        };

        match outcome {
            Ok(result) => match controller.complete_submission(result.clone()) {
                Ok(()) => {
                    controller.context_mut().current_level = Some(result.level.clone());
                    SubmissionOutcome::Completed(result)
                }
                Err(err) => SubmissionOutcome::Failed {
                    message: SUBMISSION_FAILED_MESSAGE.to_string(),
                    error: err,
                },
            },
            Err(err) => {
                if let Err(state_err) = controller.fail_submission(&err) {
                    log::error!("Could not reopen quiz after failed submission: {}", state_err);
                }
                SubmissionOutcome::Failed {
                    message: SUBMISSION_FAILED_MESSAGE.to_string(),
                    error: err,
                }
            }
        }
    }
}
