//! Cross-origin resource sharing

use salvo::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsHandler},
    http::{Method, header::HeaderValue},
};
use tracing::warn;

use crate::config::cors::CorsConfig;

pub(crate) fn handler(config: &CorsConfig) -> CorsHandler {
    Cors::new()
        .allow_origin(allow_origin(&config.cors_allowed_origins))
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
        ]))
        .allow_headers(AllowHeaders::any())
        .into_handler()
}

fn allow_origin(origins: &[String]) -> AllowOrigin {
    if origins.iter().any(|origin| origin.trim() == "*") {
        return AllowOrigin::any();
    }

    AllowOrigin::list(origins.iter().filter_map(|origin| {
        HeaderValue::from_str(origin.trim())
            .inspect_err(|source| {
                warn!(origin = %origin, "ignoring invalid CORS origin: {source}");
            })
            .ok()
    }))
}
