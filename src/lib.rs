//! Bookshelf - Main Library
//!
//! A shared list of books with nested comments, served over a small REST API
//! and edited by clients that apply changes optimistically.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and server
//!   - `Book`, `Comment`, `RecordId` and request/response bodies
//!   - Configuration and validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server for `/api/books`
//!   - Static asset serving and security headers
//!
//! - **`client`** - Client-side code
//!   - `BooksApi` REST client
//!   - `ListStore`, the versioned list presentation code renders from
//!   - `MutationCoordinator`, optimistic add/delete with rollback
//!
//! # Feature Flags
//!
//! - **`ssr`** - Server build (enables the `backend` module). On by default.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use bookshelf::backend::server::create_app;
//! use bookshelf::shared::AppConfig;
//!
//! let app = create_app(AppConfig::default());
//! // Use app with axum::serve
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use bookshelf::client::{Config, HttpBooksApi, ListStore, MutationCoordinator};
//!
//! # async fn example() {
//! let store = ListStore::new();
//! let coordinator = MutationCoordinator::new(HttpBooksApi::new(Config::new()), store.clone());
//! coordinator.refresh().await.ok();
//! let mut changes = store.subscribe();
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `backend::error::BackendError` for server responses
//! - `client::ApiError` for failed requests

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// Client: REST client, list store and optimistic mutations
pub mod client;
