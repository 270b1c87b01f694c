use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
/// Instruct-tuned model served on the legacy completions endpoint.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";
const COMPLETIONS_PATH: &str = "/v1/completions";
const MAX_TOKENS: u32 = 256;

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}

/// HTTP client for the OpenAI completions API (and compatible servers).
///
/// Implements [`TextGenerator`] so the horoscope use cases stay decoupled
/// from transport and serialization details. One call per prompt, no
/// retries; every failure comes back as [`DomainError::Upstream`].
///
/// No request timeout is applied unless one is configured.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, DomainError> {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            DomainError::internal(format!("OpenAiClient: failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, prompt: &str, temperature: f32) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            prompt,
            temperature,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OpenAiClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OpenAiClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::upstream(format!("OpenAiClient: failed to parse response: {e}"))
        })?;

        let text = api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or_else(|| DomainError::upstream("OpenAiClient: response contained no choices"))?;

        debug!("OpenAiClient: received {} bytes of completion", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new("sk-test", DEFAULT_MODEL, server.base_url(), None).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = OpenAiClient::new("k", "m", "http://localhost:8080/", None).unwrap();
        assert_eq!(client.url(), "http://localhost:8080/v1/completions");
        assert_eq!(client.model(), "m");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_verbatim() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/completions")
                    .header("authorization", "Bearer sk-test")
                    .json_body_partial(
                        json!({
                            "model": "gpt-3.5-turbo-instruct",
                            "prompt": "Tell me",
                            "max_tokens": 256
                        })
                        .to_string(),
                    );
                then.status(200).json_body(json!({
                    "id": "cmpl-1",
                    "object": "text_completion",
                    "choices": [
                        {
                            "text": "\n\nYour career flourishes.",
                            "index": 0,
                            "finish_reason": "stop"
                        },
                        {"text": "ignored", "index": 1, "finish_reason": "stop"}
                    ]
                }));
            })
            .await;

        let text = client_for(&server).complete("Tell me", 0.7).await.unwrap();

        assert_eq!(text, "\n\nYour career flourishes.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_sends_temperature() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/completions")
                    .json_body_partial(r#"{"temperature": 0.25}"#);
                then.status(200).json_body(json!({"choices": [{"text": "ok"}]}));
            })
            .await;

        let text = client_for(&server).complete("p", 0.25).await.unwrap();

        assert_eq!(text, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/completions");
                then.status(401)
                    .json_body(json!({"error": {"message": "Incorrect API key provided"}}));
            })
            .await;

        let err = client_for(&server).complete("p", 0.7).await.unwrap_err();

        assert!(err.is_upstream());
        assert!(err.message().contains("401"), "{err}");
    }

    #[tokio::test]
    async fn test_malformed_body_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/completions");
                then.status(200).body("not json");
            })
            .await;

        let err = client_for(&server).complete("p", 0.7).await.unwrap_err();

        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_empty_choices_is_upstream_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/completions");
                then.status(200).json_body(json!({"choices": []}));
            })
            .await;

        let err = client_for(&server).complete("p", 0.7).await.unwrap_err();

        assert!(err.is_upstream());
        assert!(err.message().contains("no choices"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_upstream_error() {
        let client = OpenAiClient::new("k", "m", "http://127.0.0.1:1", None).unwrap();

        let err = client.complete("p", 0.7).await.unwrap_err();

        assert!(err.is_upstream());
        assert!(err.message().contains("request failed"));
    }
}
