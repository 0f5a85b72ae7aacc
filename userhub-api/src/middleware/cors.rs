/// CORS layer built from configuration
///
/// An origin list containing `*` yields a fully permissive layer without
/// credentials. Otherwise the listed origins are allowed with credentials,
/// and `*` in the method or header list mirrors whatever the preflight asks for.
use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v.trim() == "*")
}

/// Builds the CORS layer
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if is_wildcard(&config.allowed_origins) {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let methods = if is_wildcard(&config.allowed_methods) {
        AllowMethods::mirror_request()
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.trim().to_uppercase().parse().ok())
            .collect();
        AllowMethods::list(methods)
    };

    let headers = if is_wildcard(&config.allowed_headers) {
        AllowHeaders::mirror_request()
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.trim().parse().ok())
            .collect();
        AllowHeaders::list(headers)
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
