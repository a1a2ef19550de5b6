use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion credential is missing")]
    MissingCredential,
    #[error("completion request timed out")]
    Timeout,
    #[error("failed to send completion request: {0}")]
    Transport(reqwest::Error),
    #[error("completion request failed ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to parse completion response: {0}")]
    MalformedResponse(reqwest::Error),
    #[error("completion response contained no choices")]
    EmptyResponse,
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Sends a rendered prompt to a hosted text-completion model.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, CompletionError>;

    /// Model identifier reported back to callers.
    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints.
pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl AsRef<str>,
        model: impl Into<String>,
    ) -> Self {
        let base = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            url: format!("{base}{CHAT_COMPLETIONS_PATH}"),
            model: model.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, CompletionError> {
        if api_key.trim().is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "sending completion request");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            warn!(%status, "completion endpoint returned an error");
            return Err(CompletionError::Status { status, body });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(CompletionError::MalformedResponse)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(CompletionError::EmptyResponse)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_url_without_double_slash() {
        let client = OpenAiClient::new(reqwest::Client::new(), "http://localhost:1/", "gpt-4o");
        assert_eq!(client.url, "http://localhost:1/v1/chat/completions");
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn request_body_has_single_user_message() {
        let request = ChatRequest {
            model: "gpt-4o",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [{ "role": "user", "content": "hi" }]
            })
        );
    }

    #[tokio::test]
    async fn blank_key_is_rejected_before_sending() {
        let client = OpenAiClient::new(reqwest::Client::new(), "http://127.0.0.1:1", "gpt-4o");
        let err = client.complete("  ", "prompt").await.unwrap_err();
        assert!(matches!(err, CompletionError::MissingCredential));
    }
}
