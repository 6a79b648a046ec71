// HTTP API server
// Usage: cargo run --features api --bin api_server

use carbon_estimator::{create_router, AppState, EngineConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carbon_estimator=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = EngineConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  ADVICE_MODEL: {}", config.advice.model);
    tracing::info!("  ADVICE_TIMEOUT_SECS: {}", config.advice.timeout_secs);
    tracing::info!("  DATABASE_PATH: {}", config.database_path.as_deref().unwrap_or("(disabled)"));
    tracing::info!("  STRICT_VALIDATION: {}", config.strict_validation);

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
