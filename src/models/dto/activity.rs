use serde::{Deserialize, Serialize};
use validator::Validate;

pub const COMPLETED_STATUS: &str = "Completed";

/// Body of `POST /activities/progress`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ActivityProgressRequest {
    #[validate(range(min = 1))]
    pub child_id: i64,
    #[validate(range(min = 1))]
    pub activity_id: i64,
    pub completion_status: String,
    pub time_spent_minutes: u32,
    pub score: u32,
}

impl ActivityProgressRequest {
    pub fn completed(child_id: i64, activity_id: i64, time_spent_minutes: u32, score: u32) -> Self {
        Self {
            child_id,
            activity_id,
            completion_status: COMPLETED_STATUS.to_string(),
            time_spent_minutes,
            score,
        }
    }
}
