use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::dto::{Ack, ActivityProgressRequest},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    async fn record_progress(&self, request: &ActivityProgressRequest) -> AppResult<Ack>;
}
