// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("API key not configured")]
    MissingApiKey,

    /// The generation API answered with a non-success status.
    #[error("generation API returned status {status}")]
    Upstream { status: u16, detail: String },

    #[error("generation API request timed out")]
    Timeout,

    /// Transport-level failure talking to the generation API.
    #[error("failed to reach generation API: {0}")]
    Request(reqwest::Error),

    /// The upstream body was missing `candidates[0].content.parts[0].text`.
    #[error("no generated text in upstream response")]
    NoReply,
}

/// The one error shape the client ever sees. `status` and `details` are only
/// populated for upstream failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            details: None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else {
            // The request URL carries the ?key= credential; strip it before
            // the error can reach a log line or response body.
            AppError::Request(err.without_url())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(msg)),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::new("Method not allowed"),
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("API key not configured"),
            ),
            AppError::Upstream { status, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Generation API error".to_string(),
                    status: Some(status),
                    details: Some(detail),
                },
            ),
            AppError::Timeout => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("Generation API request timed out"),
            ),
            AppError::Request(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to reach generation API".to_string(),
                    status: None,
                    details: Some(err.to_string()),
                },
            ),
            AppError::NoReply => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("No response generated"),
            ),
        };

        (code, Json(body)).into_response()
    }
}
