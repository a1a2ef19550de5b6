use std::sync::Arc;

use anyhow::Context;
use domain_qa::{build_app, run_server, AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; the key must be entered in the form");
    }
    info!(model = %config.model, prompt_style = ?config.prompt_style, "starting domain-qa");

    let port = config.port;
    let app = build_app(Arc::new(AppState::from_config(config)));

    run_server(app, port)
        .await
        .with_context(|| format!("server on port {port} failed"))
}
