use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::{domain::AssessmentResult, dto::SubmissionPayload},
};

/// Remote analyzer that scores a finished placement test.
///
/// Any `Err` is treated by the quiz flow as a retryable failure; there is no
/// partial success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    async fn submit_assessment(&self, payload: &SubmissionPayload) -> AppResult<AssessmentResult>;
}
