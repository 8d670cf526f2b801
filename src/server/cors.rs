//! CORS policy for the browser frontend.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing::warn;

/// Build a CORS layer for the configured frontend origins.
///
/// Returns `None` when no origins are configured. Credentials are allowed,
/// so methods and headers mirror the preflight request instead of using a
/// wildcard. Origins that are not valid header values are skipped with a
/// warning.
#[must_use]
pub fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
    )
}
