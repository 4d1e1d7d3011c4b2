//! Book handlers: add, edit, delete, list.

use crate::error::AppError;
use crate::extractors::{JsonBody, RecordId};
use crate::model::{BookPatch, NewBook};
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::BookService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn add(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewBook>,
) -> Result<impl IntoResponse, AppError> {
    BookService::add(&state.pool, body).await?;
    Ok(success_one("You've added a new book!"))
}

pub async fn edit(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(patch): JsonBody<BookPatch>,
) -> Result<impl IntoResponse, AppError> {
    BookService::edit(&state.pool, id, patch).await?;
    Ok(success_one_ok("Book was updated"))
}

pub async fn delete(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<impl IntoResponse, AppError> {
    let book = BookService::delete(&state.pool, id).await?;
    Ok(success_one_ok(format!("the book {} has been deleted", book.title)))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = BookService::list(&state.pool).await?;
    Ok(success_many(rows))
}
