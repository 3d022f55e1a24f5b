use anyhow::Context;
use tracing_subscriber::EnvFilter;

use locadora_web::config::{AppConfig, QuoteConfig};
use locadora_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "locadora_web=debug,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::new(&config.sheet_url, QuoteConfig::default());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("quote desk listening on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
