//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Malformed requests and unknown routes
//! - `SharedError` - Validation errors from the shared module
//! - `StoreError` - Storage errors
//!
//! # HTTP Response Conversion
//!
//! Every error becomes a non-2xx response with a `{ "error": <message> }`
//! JSON body. A client that sees any such response treats the request as
//! failed.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, UNKNOWN_ROUTE};
