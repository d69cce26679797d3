use socialx_web::{build_router, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "socialx_web=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let app = build_router(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!("Server running on http://{}", config.bind_addr);
    info!("Routes:");
    info!("  GET    /                 - Landing page");
    info!("  GET    /health           - Health check");
    info!("  ANY    /api/*            - Rewritten to {}/api/*", config.api_url.as_str().trim_end_matches('/'));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
