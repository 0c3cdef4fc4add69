/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * - `Arc<RwLock<dyn BookStore>>` for concurrent access to the books
 * - `Arc<AppConfig>` for read-only configuration, read when the router
 *   is built
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use bookshelf::backend::books::SharedBookStore;
 * use axum::extract::State;
 *
 * async fn handler(State(books): State<SharedBookStore>) {
 *     let count = books.read().await.list().map(|b| b.len()).unwrap_or(0);
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::books::{InMemoryBookStore, SharedBookStore};
use crate::shared::AppConfig;

/// Central state container shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Book storage
    pub books: SharedBookStore,
    /// Configuration the server was started with
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(books: SharedBookStore, config: AppConfig) -> Self {
        Self {
            books,
            config: Arc::new(config),
        }
    }

    /// State backed by an empty in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(InMemoryBookStore::new().shared(), config)
    }
}

impl FromRef<AppState> for SharedBookStore {
    fn from_ref(state: &AppState) -> Self {
        state.books.clone()
    }
}
