// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Connection failure, transport error, or a backend body that is not JSON.
    #[error("inference backend error: {0}")]
    Backend(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Backend(err) => {
                tracing::error!(error = %err, "relay to inference backend failed");
                // Bare 500, no error detail in the body.
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
