//! Books HTTP Handlers
//!
//! This module contains the HTTP handlers for the books API. Each handler
//! validates its input, delegates to the `BookStore`, and returns JSON or a
//! `BackendError` (which renders as the `{ "error": ... }` envelope).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::store::SharedBookStore;
use crate::backend::error::BackendError;
use crate::shared::{ActionResult, Book, NewBook, NewComment, RecordId};

/// Parse a path id, turning a malformed id into a validation error
fn parse_id(raw: &str) -> Result<RecordId, BackendError> {
    Ok(RecordId::parse(raw)?)
}

/// `GET /api/books`
pub async fn list_books(
    State(store): State<SharedBookStore>,
) -> Result<Json<Vec<Book>>, BackendError> {
    let books = store.read().await.list()?;
    Ok(Json(books))
}

/// `POST /api/books`
pub async fn add_book(
    State(store): State<SharedBookStore>,
    payload: Result<Json<NewBook>, JsonRejection>,
) -> Result<Json<Book>, BackendError> {
    let Json(draft) = payload?;
    draft.validate()?;

    let book = store.write().await.insert(draft.title, draft.author)?;
    tracing::info!("Added book {:?} as {:?}", book.title, book.id);
    Ok(Json(book))
}

/// `DELETE /api/books`
pub async fn delete_all_books(
    State(store): State<SharedBookStore>,
) -> Result<Json<ActionResult>, BackendError> {
    let count = store.write().await.clear()?;
    tracing::info!("Deleted all {} books", count);
    Ok(Json(ActionResult::new("complete delete successful")))
}

/// `GET /api/books/{id}`
pub async fn get_book(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
) -> Result<Json<Book>, BackendError> {
    let id = parse_id(&id)?;
    let book = store.read().await.get(&id)?;
    Ok(Json(book))
}

/// `POST /api/books/{id}`
pub async fn add_comment(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
    payload: Result<Json<NewComment>, JsonRejection>,
) -> Result<Json<Book>, BackendError> {
    let id = parse_id(&id)?;
    let Json(comment) = payload?;
    comment.validate()?;

    let book = store.write().await.add_comment(&id, comment.comment)?;
    tracing::debug!("Book {} now has {} comments", id, book.comment_count());
    Ok(Json(book))
}

/// `DELETE /api/books/{id}`
pub async fn delete_book(
    State(store): State<SharedBookStore>,
    Path(id): Path<String>,
) -> Result<Json<ActionResult>, BackendError> {
    let id = parse_id(&id)?;
    let removed = store.write().await.remove(&id)?;
    tracing::info!("Deleted book {} ({:?})", id, removed.title);
    Ok(Json(ActionResult::new("delete successful")))
}

/// Fallback for anything under `/api` that matches no route or method
pub async fn unknown_route() -> BackendError {
    BackendError::unknown_route()
}
