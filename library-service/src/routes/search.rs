use crate::error::AppError;
use crate::models::classify::SearchResult;
use crate::state::AppState;
use axum::{
    extract::{Form, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Title search against the classify service. Like `add_book`, the term
/// may come from the query string or a form body, and the body wins.
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchParams>,
    form: Option<Form<SearchParams>>,
) -> Result<Json<Vec<SearchResult>>, AppError> {
    let search = form
        .and_then(|Form(params)| params.search)
        .or(query.search)
        .unwrap_or_default();
    info!("Search query: {:?}", search);

    let results = state.classify.search(&search).await?;

    info!("Search for {:?} returned {} works", search, results.len());
    Ok(Json(results))
}
