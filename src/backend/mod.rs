//! Backend Module
//!
//! This module contains all server-side code for the bookshelf application:
//! an Axum HTTP server exposing the books REST API, serving the built
//! front-end assets, and adding security headers to every response.
//!
//! # Architecture
//!
//! - **`books`** - Book storage and the `/api/books` handlers
//! - **`error`** - `BackendError` and its JSON envelope
//! - **`middleware`** - Security headers
//! - **`routes`** - Router assembly
//! - **`server`** - State, configuration and app creation
//!
//! # Error Handling
//!
//! A bad request never takes the server down: every handler error is
//! converted into a non-2xx response with `{ "error": <message> }`.

/// Book storage and handlers
pub mod books;

/// Backend error types
pub mod error;

/// Cross-cutting layers
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server initialization and state
pub mod server;
