use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use providerdesk::config::AppConfig;
use providerdesk::db;
use providerdesk::handlers;
use providerdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    tracing::info!(policy = ?config.transition_policy, "booking ledger ready");

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::seeded(config, conn)?);
    let app = handlers::router(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
