//! Error types for the mock API.
//!
//! [`ApiError`] is what every fallible handler and extractor returns. Its
//! [`IntoResponse`](axum::response::IntoResponse) implementation renders
//! the `{error, message}` body the front end expects.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_store::StoreError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested character or path does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request could not be decoded (body, content type, query or
    /// path). Carries the status axum chose for the rejection.
    #[error("{message}")]
    Rejected {
        /// 4xx status for the response.
        status: StatusCode,
        /// What was wrong with the request.
        message: String,
    },

    /// An internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CharacterNotFound(_) | StoreError::RowNotFound(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let label = status.canonical_reason().unwrap_or("Error");

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else if matches!(self, Self::Rejected { .. }) {
            tracing::debug!(%status, error = %self, "Request rejected");
        }

        let body = serde_json::json!({
            "error": label,
            "message": self.to_string(),
        });

        (status, axum::Json(body)).into_response()
    }
}
