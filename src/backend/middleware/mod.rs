//! Middleware Module
//!
//! Cross-cutting layers applied to the whole router.
//!
//! - **`security`** - Content-Security-Policy and related response headers

/// Security response headers
pub mod security;

pub use security::with_security_headers;
