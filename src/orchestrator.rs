use tracing::{info, warn};

use crate::completion::{CompletionClient, CompletionError};
use crate::config::ContextEndpoints;
use crate::prompt::{truncate_context, PromptStyle};
use crate::Domain;

/// Fetches raw context for `query` from the source mapped to `domain`.
///
/// Failures are folded into an `"Error fetching data: ..."` string which the
/// caller cannot tell apart from real content.
pub async fn fetch_context(
    client: &reqwest::Client,
    endpoints: &ContextEndpoints,
    query: &str,
    domain: Domain,
) -> String {
    match request_context(client, endpoints, query, domain).await {
        Ok(body) => {
            info!(%domain, bytes = body.len(), "fetched domain context");
            body
        }
        Err(err) => {
            let context = format!("Error fetching data: {err}");
            warn!(%domain, error = %log_safe(err), "context fetch failed");
            context
        }
    }
}

/// Error text without the request URL, which carries the finance `apikey`.
fn log_safe(err: reqwest::Error) -> String {
    err.without_url().to_string()
}

async fn request_context(
    client: &reqwest::Client,
    endpoints: &ContextEndpoints,
    query: &str,
    domain: Domain,
) -> Result<String, reqwest::Error> {
    client
        .get(domain.endpoint(endpoints))
        .query(&domain.query_params(query, endpoints))
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}

/// Everything one answer needs besides the question itself.
pub struct Orchestrator<'a> {
    pub http: &'a reqwest::Client,
    pub endpoints: &'a ContextEndpoints,
    pub completion: &'a dyn CompletionClient,
    pub prompt_style: PromptStyle,
}

impl Orchestrator<'_> {
    /// Fetch, truncate, render, complete. The completion error is returned
    /// as-is; there is no retry.
    pub async fn build_answer(
        &self,
        query: &str,
        domain: Domain,
        api_key: &str,
    ) -> Result<String, CompletionError> {
        let context = fetch_context(self.http, self.endpoints, query, domain).await;
        let context = truncate_context(&context);
        let prompt = self.prompt_style.render(domain, context, query);
        self.completion.complete(api_key, &prompt).await
    }
}
