use crate::models::storage::StorageError;
use crate::services::classify::ClassifyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Anything a handler can fail with. Every variant is reported to the client
/// as a 500 carrying the raw error text.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Render(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
