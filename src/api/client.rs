use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::ChatBackend;
use super::types::{BotReply, Health, NewSession, SendMessageRequest, SessionTranscript, Stats};
use crate::error::ApiError;

const API_PREFIX: [&str; 2] = ["api", "chat"];

/// HTTP client for the LogiQ Gen chat backend.
pub struct ApiClient {
    client: Client,
    base: Url,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the server rooted at `base_url`.
    ///
    /// A zero `timeout` disables the per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if !timeout.is_zero() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("Invalid base URL '{base_url}': {e}"))?;
        if base.cannot_be_a_base() {
            anyhow::bail!("Invalid base URL '{base_url}': not a server root");
        }

        Ok(Self {
            client,
            base,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Appends `segments` to the server root, percent-encoding each one so
    /// a session id can never escape its path segment.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.into()
    }

    fn api_url(&self, segments: &[&str]) -> String {
        let all: Vec<&str> = API_PREFIX.iter().chain(segments).copied().collect();
        self.url(&all)
    }

    /// Checks `GET /health`.
    pub async fn health(&self) -> Result<Health, ApiError> {
        let url = self.url(&["health"]);
        let body = execute(self.client.get(&url), &url).await?;
        decode(&body, &url)
    }

    /// Fetches `GET /api/chat/stats`.
    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let url = self.api_url(&["stats"]);
        let body = execute(self.client.get(&url), &url).await?;
        decode(&body, &url)
    }
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn create_session(&self) -> Result<NewSession, ApiError> {
        let url = self.api_url(&["session", "new"]);
        let body = execute(self.client.post(&url), &url).await?;
        decode(&body, &url)
    }

    async fn send_message(&self, session_id: &str, content: &str) -> Result<BotReply, ApiError> {
        let url = self.api_url(&["message"]);
        let request = SendMessageRequest {
            content,
            session_id,
        };
        let body = execute(self.client.post(&url).json(&request), &url).await?;
        decode(&body, &url)
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let url = self.api_url(&["session", session_id]);
        execute(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn session_history(&self, session_id: &str) -> Result<SessionTranscript, ApiError> {
        let url = self.api_url(&["session", session_id, "history"]);
        let body = execute(self.client.get(&url), &url).await?;
        decode(&body, &url)
    }
}

/// Sends the request and returns the body of a successful response.
async fn execute(request: RequestBuilder, url: &str) -> Result<String, ApiError> {
    tracing::debug!(url, "sending request");

    let transport = |source| ApiError::Transport {
        url: url.to_string(),
        source,
    };

    let response = request.send().await.map_err(transport)?;
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        tracing::debug!(url, status = status.as_u16(), "request rejected");
        return Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

fn decode<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
