//! SocialX web front: serves the landing page and rewrites `/api/*` to the
//! backend origin.

pub mod config;
pub mod errors;
pub mod pages;
pub mod rewrite;
pub mod routes;
pub mod states;

pub use states::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use config::Config;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application router from configuration.
pub fn build_router(config: &Config) -> Result<Router, reqwest::Error> {
    let state = AppState::new(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(routes::home::index))
        .route("/index.html", get(routes::home::index))
        .route("/health", get(routes::health::health_check))
        .fallback(routes::proxy::rewrite)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(GlobalConcurrencyLimitLayer::new(config.concurrency_limit.get()))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
