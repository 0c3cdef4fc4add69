/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes, nested under `/api` with their own "Unknown route" fallback
 * 2. `/books/{title}` redirect to the home page
 * 3. Fallback: static assets from the configured directory
 *
 * Security headers wrap all of the above.
 */

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::middleware::with_security_headers;
use crate::backend::routes::api_routes::api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the book store and config
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let static_dir = app_state.config.static_dir.clone();

    let router = Router::new()
        .nest("/api", api_routes())
        // Book pages are rendered client-side from the home page
        .route("/books/{title}", get(|| async { Redirect::to("/") }))
        .fallback_service(ServeDir::new(static_dir));

    with_security_headers(router).with_state(app_state)
}
