pub mod api;
pub mod completion;
pub mod config;
pub mod domain;
pub mod orchestrator;
pub mod prompt;

use std::sync::Arc;

use axum::Router;
use tracing::info;

pub use completion::{CompletionClient, CompletionError, OpenAiClient};
pub use config::{AppConfig, ContextEndpoints};
pub use domain::Domain;
pub use orchestrator::{fetch_context, Orchestrator};
pub use prompt::{render_prompt, truncate_context, PromptStyle, MAX_CONTEXT_CHARS};

/// Shared, read-only per process. Request credentials never land here.
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
    pub completion: Arc<dyn CompletionClient>,
}

impl AppState {
    /// Wires the OpenAI client from `config`, sharing one connection pool
    /// between context fetches and completions.
    pub fn from_config(config: AppConfig) -> Self {
        let http = reqwest::Client::new();
        let completion = Arc::new(OpenAiClient::new(
            http.clone(),
            &config.openai_base_url,
            config.model.clone(),
        ));
        Self {
            config,
            http,
            completion,
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}
