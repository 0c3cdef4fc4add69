//! Books Module
//!
//! Router/Controller for the books collection.
//!
//! - **`store`** - `BookStore` trait and the in-memory implementation
//! - **`handlers`** - Axum handlers for `/api/books`

/// Book persistence
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::{BookStore, BookStoreError, InMemoryBookStore, SharedBookStore};
