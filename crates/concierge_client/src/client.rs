//! reqwest implementation of the chat transport

use std::time::Duration;

use async_trait::async_trait;
use chat_core::{ChatRequest, ChatResponse, ChatTransport, Config, TransportError};
use reqwest::Client;
use tracing::debug;

/// HTTP client for the concierge backend.
///
/// One attempt per call, bounded by the configured timeout; the
/// controller's fail-soft path handles everything that goes wrong here.
#[derive(Debug, Clone)]
pub struct ConciergeClient {
    http: Client,
    api_base: String,
}

fn map_request_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_decode() {
        TransportError::Decode(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}

impl ConciergeClient {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[async_trait]
impl ChatTransport for ConciergeClient {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse, TransportError> {
        let response = self
            .http
            .post(self.url("/chat"))
            .json(&request)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(map_request_error)
    }

    async fn clear_session(&self, session_id: &str) -> Result<(), TransportError> {
        let response = self
            .http
            .delete(self.url(&format!("/chat/session/{session_id}")))
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        debug!(session_id, "cleared server-side session history");
        Ok(())
    }

    async fn check(&self) -> bool {
        match self.http.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
