// CORS middleware
use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Headers Claude clients send from browsers.
const ALLOWED_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::AUTHORIZATION,
    HeaderName::from_static("x-api-key"),
    HeaderName::from_static("anthropic-version"),
];

/// create CORS layer
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(ALLOWED_HEADERS)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
