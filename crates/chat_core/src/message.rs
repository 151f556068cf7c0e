//! Message types making up the conversation history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::{BookingInfo, HotelInfo};

/// The assistant message every session starts with.
pub const GREETING_TEXT: &str = "Hello! I'm your AI hotel concierge. I can help you search for hotels, make bookings, modify reservations, or cancel them. How can I assist you today?";

/// Substituted for the assistant reply when the transport call fails.
pub const FALLBACK_REPLY_TEXT: &str =
    "I'm sorry, I encountered an error processing your request. Please try again.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single entry in the conversation history.
///
/// Messages are immutable once appended; only a full session reset
/// removes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,

    /// Booking confirmation attached to assistant replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_info: Option<BookingInfo>,

    /// Hotel search results, passed through untouched for rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotels: Option<Vec<HotelInfo>>,
}

impl Message {
    /// Create a user message with a fresh id and timestamp.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            booking_info: None,
            hotels: None,
        }
    }

    /// Create an assistant message, optionally carrying structured payloads.
    pub fn assistant(
        content: impl Into<String>,
        booking_info: Option<BookingInfo>,
        hotels: Option<Vec<HotelInfo>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender: Sender::Assistant,
            timestamp: Utc::now(),
            booking_info,
            hotels,
        }
    }

    /// The seeded greeting message. Fresh id and timestamp on every call.
    pub fn greeting() -> Self {
        Self::assistant(GREETING_TEXT, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_has_no_attachments() {
        let msg = Message::user("Book a room");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.content, "Book a room");
        assert!(msg.booking_info.is_none());
        assert!(msg.hotels.is_none());
    }

    #[test]
    fn greeting_is_fresh_each_time() {
        let a = Message::greeting();
        let b = Message::greeting();
        assert_eq!(a.content, b.content);
        assert_eq!(a.sender, Sender::Assistant);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
