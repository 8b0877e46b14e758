use std::time::Duration;

use thiserror::Error;

use crate::models::domain::QuestionKind;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Submission service error: {0}")]
    ServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::SessionError(_) => "SESSION_ERROR",
            AppError::ServiceError(_) => "SERVICE_ERROR",
            AppError::SerializationError(_) => "SERIALIZATION_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::InternalError(format!("HTTP client error: {}", err))
    }
}
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        AppError::ServiceError(err.to_string())
    }
}
impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        match err {
            EditorError::QuestionNotFound { .. } | EditorError::OptionNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            EditorError::Validation(message) => AppError::ValidationError(message),
            EditorError::SubmissionFailed(source) => source.into(),
            EditorError::WrongQuestionKind { .. } | EditorError::AlreadySubmitted => {
                AppError::InternalError(err.to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures reported by a [`TestSubmissionService`](crate::services::TestSubmissionService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed service response: {0}")]
    MalformedResponse(String),

    #[error("Submission timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("No question at index {index} (draft has {len})")]
    QuestionNotFound { index: usize, len: usize },

    #[error("Question {question} has no option at index {index} ({len} options)")]
    OptionNotFound {
        question: usize,
        index: usize,
        len: usize,
    },

    #[error("Question {index} is {actual}, expected {expected}")]
    WrongQuestionKind {
        index: usize,
        expected: QuestionKind,
        actual: QuestionKind,
    },

    #[error("Test has already been submitted")]
    AlreadySubmitted,

    #[error("Draft is incomplete: {0}")]
    Validation(String),

    #[error("Submission failed: {0}")]
    SubmissionFailed(#[from] ServiceError),
}

impl From<validator::ValidationErrors> for EditorError {
    fn from(err: validator::ValidationErrors) -> Self {
        EditorError::Validation(err.to_string())
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
