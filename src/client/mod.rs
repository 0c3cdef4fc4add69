//! Client Module
//!
//! Client-side half of the books application: the typed REST client, the
//! in-memory list that presentation code renders from, and the coordinator
//! that mutates that list optimistically.
//!
//! # Architecture
//!
//! - **`books_api`** - `BooksApi` trait and its `reqwest` implementation
//! - **`store`** - `ListStore`, the versioned book list
//! - **`coordinator`** - `MutationCoordinator`, optimistic add/delete with rollback
//! - **`config`** - Client configuration (server URL)
//! - **`error`** - `ApiError`
//!
//! # Data Flow
//!
//! ```text
//! UI event -> MutationCoordinator -> ListStore (optimistic write)
//!                                 -> BooksApi (request)
//!                                 -> ListStore (rollback on failure)
//!                                 -> MutationEvent broadcast
//! ```

pub mod books_api;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod store;

// Re-export main types
pub use books_api::{BooksApi, HttpBooksApi};
pub use config::Config;
pub use coordinator::{MutationCoordinator, MutationEvent, MutationKind, MutationOutcome, Rollback};
pub use error::ApiError;
pub use store::{ListStore, Snapshot, Transition};
