//! HTTP error mapping
//!
//! Every failure leaves the server as `{"error": "<message>"}` with a status
//! picked from the ledger error kind.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::LedgerError;

#[derive(Debug)]
pub enum ApiError {
    Ledger(LedgerError),
    /// The blocking ledger task panicked or was cancelled.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Ledger(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Ledger(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Ledger(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Ledger(err) => {
                if status.is_server_error() {
                    error!(error = %err, "ledger request failed");
                }
                err.to_string()
            }
            ApiError::Internal(message) => {
                error!(%message, "ledger task failed");
                "internal server error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Ledger(err)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
