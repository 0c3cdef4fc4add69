//! Security Headers
//!
//! Adds a fixed set of security headers to every response. Handlers that
//! set one of these headers themselves keep their own value.

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy sent with every response
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-eval'; \
    img-src 'self' data:; \
    style-src 'unsafe-inline' 'self' fonts.googleapis.com; \
    font-src 'self' data: fonts.gstatic.com";

/// Headers and values applied by [`with_security_headers`]
pub fn security_headers() -> [(HeaderName, HeaderValue); 4] {
    [
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ),
    ]
}

/// Wrap every route of `router` with the security headers
pub fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let [csp, nosniff, frame, referrer] = security_headers();
    router.layer(
        ServiceBuilder::new()
            .layer(SetResponseHeaderLayer::if_not_present(csp.0, csp.1))
            .layer(SetResponseHeaderLayer::if_not_present(nosniff.0, nosniff.1))
            .layer(SetResponseHeaderLayer::if_not_present(frame.0, frame.1))
            .layer(SetResponseHeaderLayer::if_not_present(referrer.0, referrer.1)),
    )
}
