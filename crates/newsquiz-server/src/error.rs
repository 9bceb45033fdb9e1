//! Error types for the quiz service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Quiz service errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Every content source failed
    #[error("Failed to fetch content: {0}")]
    Fetch(String),

    /// Requested item is not in the fetched batch
    #[error("Index {index} is out of range: only {available} items were fetched")]
    IndexOutOfRange { index: usize, available: usize },

    /// Source text yielded no usable facts
    #[error("No questions could be generated from this content")]
    NoQuestionsGenerated,

    /// Answers do not line up with questions
    #[error("Answers count mismatch: {answers} answers for {questions} questions")]
    MalformedSubmission { questions: usize, answers: usize },

    /// Bad request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Feed or Atom document could not be parsed
    #[error("Feed parse error: {0}")]
    Feed(String),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    /// Create a feed parse error
    pub fn feed(message: impl Into<String>) -> Self {
        Self::Feed(message.into())
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// HTTP status and machine-readable kind for this error
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            Error::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            Error::Fetch(_) => (StatusCode::BAD_GATEWAY, "fetch_error"),
            Error::IndexOutOfRange { .. } => (StatusCode::NOT_FOUND, "index_out_of_range"),
            Error::NoQuestionsGenerated => {
                (StatusCode::UNPROCESSABLE_ENTITY, "no_questions_generated")
            }
            Error::MalformedSubmission { .. } => (StatusCode::BAD_REQUEST, "malformed_submission"),
            Error::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Error::Feed(_) => (StatusCode::BAD_GATEWAY, "feed_error"),
            Error::Http(_) => (StatusCode::BAD_GATEWAY, "http_error"),
            Error::Json(_) => (StatusCode::BAD_REQUEST, "json_error"),
            Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "io_error"),
            Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl From<newsquiz_core::Error> for Error {
    fn from(err: newsquiz_core::Error) -> Self {
        match err {
            newsquiz_core::Error::NoQuestionsGenerated => Error::NoQuestionsGenerated,
            newsquiz_core::Error::MalformedSubmission { questions, answers } => {
                Error::MalformedSubmission { questions, answers }
            }
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("Invalid config file: {}", err))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(Error::fetch("down").status_and_kind().0, StatusCode::BAD_GATEWAY);
        assert_eq!(
            Error::IndexOutOfRange { index: 12, available: 10 }.status_and_kind(),
            (StatusCode::NOT_FOUND, "index_out_of_range")
        );
        assert_eq!(
            Error::from(newsquiz_core::Error::NoQuestionsGenerated).status_and_kind().0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            Error::from(newsquiz_core::Error::malformed_submission(2, 1)).status_and_kind().1,
            "malformed_submission"
        );
    }

    #[test]
    fn test_response_is_structured() {
        let response = Error::invalid_request("content is empty").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
