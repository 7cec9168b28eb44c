use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppResult;

/// Identifiers the quiz flow needs, handed in explicitly rather than read
/// from shared storage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct SessionContext {
    #[validate(range(min = 1))]
    pub child_id: i64,

    #[validate(length(min = 1, max = 100))]
    pub child_name: Option<String>,

    /// Level most recently assigned by a completed assessment.
    pub current_level: Option<String>,
}

impl SessionContext {
    pub fn new(child_id: i64) -> AppResult<Self> {
        let context = Self {
            child_id,
            child_name: None,
            current_level: None,
        };
        context.validate()?;
        Ok(context)
    }

    pub fn with_child_name(mut self, name: impl Into<String>) -> Self {
        self.child_name = Some(name.into());
        self
    }
}
