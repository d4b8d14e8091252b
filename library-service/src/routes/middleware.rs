use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::any::Any;
use tracing::error;

/// Pings the database before every routed request and short-circuits with
/// a 500 when it is unreachable.
pub async fn verify_connection(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    state.backend.ping().await?;
    Ok(next.run(request).await)
}

/// Turns a handler panic into a 500 carrying the panic message.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Handler panicked: {}", message);
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
