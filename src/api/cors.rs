//! Cross-origin policy for browser clients.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Origin allowed when none is configured: the front-end dev server.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Builds the CORS layer for the configured origins.
///
/// `"*"` allows any origin. Origins that are not valid header values are
/// skipped with a warning; if none remain, no cross-origin request is allowed.
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        warn!("No valid CORS origins configured, cross-origin requests will be refused");
        return base;
    }

    base.allow_origin(AllowOrigin::list(parsed))
}
