use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures reading from or writing to the journal database.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal not found: {0}")]
    NotFound(i64),

    #[error("journal {journal_id} does not belong to user {user_id}")]
    Forbidden { journal_id: i64, user_id: i64 },

    #[error("{0}")]
    Conflict(String),
}

/// The inference service could not produce a completion.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(e: reqwest::Error) -> Self {
        InferenceError::Unavailable(e.to_string())
    }
}

/// Errors surfaced to HTTP callers as `{ "error": message }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a store failure onto the response a handler should send.
    /// Anything other than ownership/lookup problems becomes a 500 carrying `context`.
    pub fn from_store(e: StoreError, context: &str) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound("Journal not found".into()),
            StoreError::Forbidden { .. } => ApiError::Forbidden("Unauthorized".into()),
            StoreError::Conflict(msg) => ApiError::Validation(msg),
            other => {
                tracing::error!(error = %other, "{}", context);
                ApiError::Internal(context.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
