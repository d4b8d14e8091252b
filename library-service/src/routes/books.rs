use crate::error::AppError;
use crate::models::storage::Book;
use crate::state::AppState;
use axum::{
    extract::{Form, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
pub struct AddParams {
    pub id: Option<String>,
}

/// Resolves a work by its external id and stores it.
///
/// The id may arrive in the query string or a url-encoded form body; the
/// body takes precedence when both carry one.
pub async fn add_book(
    State(state): State<AppState>,
    Query(query): Query<AddParams>,
    form: Option<Form<AddParams>>,
) -> Result<Json<Book>, AppError> {
    let id = form
        .and_then(|Form(params)| params.id)
        .or(query.id)
        .unwrap_or_default();

    let resolved = state.classify.find(&id).await?;

    let pk = state
        .backend
        .insert_book(
            &resolved.book.title,
            &resolved.book.author,
            &resolved.book.id,
            &resolved.classification,
        )
        .await?;

    info!("Stored work {} as book {}", resolved.book.id, pk);

    Ok(Json(Book {
        id: pk,
        title: resolved.book.title,
        author: resolved.book.author,
        classification: resolved.classification,
    }))
}
