//! Common test utilities and helpers
//!
//! - Book fixtures with fixed 24 character ids
//! - In-process test server

#![allow(dead_code)]

use bookshelf::shared::{Book, RecordId};

/// Id made of one repeated character
pub fn id_of(c: char) -> RecordId {
    RecordId::parse(c.to_string().repeat(24)).expect("24 characters")
}

/// Book with a fixed id
pub fn book(c: char, title: &str) -> Book {
    Book::with_id(id_of(c), title, "Author")
}

#[cfg(feature = "ssr")]
pub mod server {
    use axum_test::TestServer;
    use bookshelf::backend::routes::create_router;
    use bookshelf::backend::server::AppState;
    use bookshelf::shared::AppConfig;
    use std::path::Path;

    /// Test server over an empty in-memory store
    pub fn test_server() -> TestServer {
        test_server_with_static(Path::new("public/build"))
    }

    pub fn test_server_with_static(static_dir: &Path) -> TestServer {
        let config = AppConfig::builder()
            .static_dir(static_dir)
            .build()
            .expect("valid config");
        TestServer::new(create_router(AppState::in_memory(config))).expect("test server")
    }
}
