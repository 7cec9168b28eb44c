use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use validator::Validate;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    gateways::{ActivityGateway, SubmissionGateway},
    models::{
        domain::AssessmentResult,
        dto::{Ack, ActivityProgressRequest, ApiErrorBody, SubmissionPayload},
    },
};

pub const SUBMIT_ASSESSMENT_PATH: &str = "/assessments/submit";
pub const ACTIVITY_PROGRESS_PATH: &str = "/activities/progress";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// `reqwest` client for the BrightBook REST API.
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpApiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base().to_string(),
            token: config.api_token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let mut request = self.client.post(&url).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let detail = ApiErrorBody::detail_from(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            log::warn!("POST {} returned {}: {}", url, status.as_u16(), detail);
            return Err(AppError::HttpError(format!(
                "{} returned {}: {}",
                path,
                status.as_u16(),
                detail
            )));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl SubmissionGateway for HttpApiClient {
    async fn submit_assessment(&self, payload: &SubmissionPayload) -> AppResult<AssessmentResult> {
        payload
            .validate()
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))?;

        log::info!(
            "Submitting {} answers for child {}",
            payload.answers.len(),
            payload.child_id
        );

        self.post_json(SUBMIT_ASSESSMENT_PATH, payload)
            .await
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))
    }
}

#[async_trait]
impl ActivityGateway for HttpApiClient {
    async fn record_progress(&self, request: &ActivityProgressRequest) -> AppResult<Ack> {
        request.validate()?;
        self.post_json(ACTIVITY_PROGRESS_PATH, request).await
    }
}
