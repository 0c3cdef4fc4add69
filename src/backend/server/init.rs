/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * state creation and route configuration.
 *
 * # Initialization Process
 *
 * 1. Create the book store
 * 2. Create the application state
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// The server starts with an empty in-memory book store.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing bookshelf server");

    let app_state = AppState::in_memory(config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    app
}
