use serde::Serialize;
use thiserror::Error;

use crate::models::domain::QuizPhase;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Question bank is empty")]
    EmptyQuestionBank,

    #[error("Malformed question: {0}")]
    MalformedQuestion(String),

    #[error("Invalid answer: option '{option_id}' does not belong to question {question_id}")]
    InvalidAnswer { question_id: i64, option_id: String },

    #[error("Answers are not accepted while the quiz is {0}")]
    NotAcceptingAnswers(QuizPhase),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Submission timed out after {0}s")]
    SubmissionTimeout(u64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::EmptyQuestionBank => "EMPTY_QUESTION_BANK",
            AppError::MalformedQuestion(_) => "MALFORMED_QUESTION",
            AppError::InvalidAnswer { .. } => "INVALID_ANSWER",
            AppError::NotAcceptingAnswers(_) => "NOT_ACCEPTING_ANSWERS",
            AppError::InvalidState(_) => "INVALID_STATE",
            AppError::SubmissionFailed(_) => "SUBMISSION_FAILED",
            AppError::SubmissionTimeout(_) => "SUBMISSION_TIMEOUT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::HttpError(_) => "HTTP_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::IoError(_) => "IO_ERROR",
        }
    }

    /// Errors the quiz flow recovers from by letting the user submit again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::SubmissionFailed(_) | AppError::SubmissionTimeout(_) | AppError::HttpError(_)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub code: &'static str,
}

impl From<&AppError> for ErrorReport {
    fn from(err: &AppError) -> Self {
        ErrorReport {
            error: err.to_string(),
            code: err.error_code(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
