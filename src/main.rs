use std::sync::Arc;

use anyhow::Context;
use mentisphere_backend::{
    config::ServiceConfig,
    routes::{cors_layer, create_router},
    services::generator::ResponseGenerator,
    state::AppState,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServiceConfig::from_env().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(frontend_url = %config.frontend_url, debug = config.debug, "starting MentiSphere Chat API");

    // A missing key leaves the chat endpoint answering 503; the process keeps running.
    let generator = match ResponseGenerator::from_config(&config) {
        Ok(generator) => Some(generator),
        Err(err) => {
            tracing::error!(error = %err, "failed to initialize Gemini service");
            None
        }
    };
    let state = Arc::new(AppState::new(generator));

    let app = create_router()
        .with_state(state)
        .layer(cors_layer(&config.frontend_url)?);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
