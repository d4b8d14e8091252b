use crate::error::AppError;
use crate::models::responses::Page;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use tera::Context;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let books = state.backend.list_books().await?;

    let context = Context::from_serialize(Page { books })?;
    let html = state.templates.render("index.html", &context)?;

    Ok(Html(html))
}
