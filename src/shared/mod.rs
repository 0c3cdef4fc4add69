//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and the client. These types define the JSON contract of the
//! books REST API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP.

/// Record identifiers
pub mod id;

/// Book and comment data structures
pub mod book;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use book::{ActionResult, Book, Comment, ErrorBody, NewBook, NewComment};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use id::{RecordId, RECORD_ID_LEN};
