pub mod books;
pub mod health;
pub mod index;
pub mod middleware;
pub mod search;

use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routed requests are gated on the database; static files from
/// `state.static_dir` are served ahead of that check.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index))
        .route("/search", get(search::search_books).post(search::search_books))
        .route("/books/add", get(books::add_book).post(books::add_book))
        .route("/status", get(health::health_check))
        .route_layer(from_fn_with_state(state.clone(), middleware::verify_connection))
        .fallback_service(ServeDir::new(&state.static_dir))
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
