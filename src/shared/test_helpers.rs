#[cfg(test)]
use axum::Router;

#[cfg(test)]
use crate::core::{app::build_app, config::AppConfig};

#[cfg(test)]
pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 1024 * 1024,
    }
}

/// Feature routes wrapped in the same layers and fallbacks as the server
#[cfg(test)]
pub fn test_app(routes: Router) -> Router {
    build_app(routes, &test_app_config())
}
