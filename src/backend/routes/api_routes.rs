/**
 * API Route Handlers
 *
 * # Routes
 *
 * - `GET    /api/books`      - List books
 * - `POST   /api/books`      - Add a book (`{title, author}`)
 * - `DELETE /api/books`      - Delete every book
 * - `GET    /api/books/{id}` - Get one book
 * - `POST   /api/books/{id}` - Comment on a book (`{comment}`)
 * - `DELETE /api/books/{id}` - Delete one book
 *
 * Anything else under `/api`, including an unsupported method on a known
 * path, answers 400 with `{"error": "Unknown route"}`.
 */

use axum::routing::get;
use axum::Router;

use crate::backend::books::handlers::{
    add_book, add_comment, delete_all_books, delete_book, get_book, list_books, unknown_route,
};
use crate::backend::server::state::AppState;

/// Build the router mounted at `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(list_books)
                .post(add_book)
                .delete(delete_all_books)
                .fallback(unknown_route),
        )
        .route(
            "/books/{id}",
            get(get_book)
                .post(add_comment)
                .delete(delete_book)
                .fallback(unknown_route),
        )
        .fallback(unknown_route)
}
