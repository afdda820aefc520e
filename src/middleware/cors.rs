//! CORS policy for the browser front-end.
//!
//! Note:
//! - CORS is enforced by browsers only. Server-to-server calls are not restricted by it.
//! - Applied at the Router level (not inside handlers).
//!
//! Policy:
//! - `ALLOWED_ORIGINS` lists exact origins: those are allowed WITH credentials.
//! - `ALLOWED_ORIGINS=*`: any origin, WITHOUT credentials.
//! - Empty allowlist: no origin is allowed (no CORS headers).

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

fn allowed_headers() -> [HeaderName; 4] {
    [
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static("x-request-id"),
    ]
}

fn layer(config: &Config) -> CorsLayer {
    let max_age = std::time::Duration::from_secs(60 * 10);

    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        // Wildcard origin must not be combined with `allow_credentials(true)`.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers(allowed_headers())
            .max_age(max_age);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _req| {
        allowed.iter().any(|v| v == origin)
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(allowed_headers())
        .max_age(max_age)
}

/// Apply CORS policy to the given Router.
pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}
