//! Transport seam between the conversation core and the concierge backend
//!
//! The controller only sees this trait; the reqwest implementation lives
//! in the concierge_client crate and tests substitute mock transports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::{BookingInfo, HotelInfo};

/// Outbound chat request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Reply payload from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_info: Option<BookingInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelInfo>>,
}

/// Failure of an outbound call. The controller treats every variant
/// the same way (fail-soft), so the split only matters for diagnostics.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    #[error("server returned status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Client-side view of the concierge backend.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one user message. Exactly one attempt; no retries.
    async fn send_message(&self, request: ChatRequest) -> Result<ChatResponse, TransportError>;

    /// Best-effort server-side history purge for a session.
    async fn clear_session(&self, session_id: &str) -> Result<(), TransportError>;

    /// Liveness probe. Swallows errors and reports plain availability.
    async fn check(&self) -> bool;
}
