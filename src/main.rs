use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chat_relay::config::Config;
use chat_relay::routes;
use chat_relay::services::openai::OpenAiProvider;
use chat_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("chat_relay=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.provider.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, every chat request will get the fallback reply");
    }

    let provider = OpenAiProvider::new(&config.provider)
        .context("building OpenAI client")?;
    info!(model = provider.model(), "completion provider ready");

    let state = Arc::new(AppState::new(Arc::new(provider)));
    let app = routes::create_router(&config.static_dir).with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;

    info!("chat relay listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
