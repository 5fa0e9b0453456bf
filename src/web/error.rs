//! Mapping of crate errors to HTTP responses.

use crate::errors::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

impl Error {
    /// HTTP status reported for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::UnknownFilter { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. }
            | Self::InvalidAmount { .. }
            | Self::NotBudgetable { .. }
            | Self::InvalidPeriod { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) | Self::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            warn!("Rejected request: {}", self);
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
