//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - `/api` endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf::backend::routes::create_router;
//! use bookshelf::backend::server::AppState;
//! use bookshelf::shared::AppConfig;
//!
//! let router = create_router(AppState::in_memory(AppConfig::default()));
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
