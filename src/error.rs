use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors surfaced to HTTP callers
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures while acquiring the catalog from upstream.
///
/// None of these reach HTTP callers: the catalog service absorbs every
/// variant and substitutes the fallback catalog.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("Transport error reaching catalog upstream: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Catalog upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Catalog fetch cancelled")]
    Cancelled,

    #[error("Catalog fetch deadline exceeded")]
    DeadlineExceeded,

    #[error("Catalog fetch failed after {attempts} attempts: {last}")]
    Exhausted {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Transport failures and non-success statuses may succeed on another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::UpstreamStatus { .. })
    }
}
