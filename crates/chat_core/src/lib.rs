//! chat_core - Core types and traits for the concierge chat client
//!
//! This crate provides the foundational types used across all chat-related crates:
//! - `message` - Message and sender types that make up the conversation history
//! - `booking` - BookingInfo, HotelInfo payloads attached to assistant replies
//! - `transport` - The ChatTransport trait and its wire DTOs
//! - `config` - Client configuration (file + environment overlay)

pub mod booking;
pub mod config;
pub mod message;
pub mod transport;

// Re-export commonly used types
pub use booking::{BookingInfo, BookingStatus, HotelInfo};
pub use config::Config;
pub use message::{Message, Sender, FALLBACK_REPLY_TEXT, GREETING_TEXT};
pub use transport::{ChatRequest, ChatResponse, ChatTransport, TransportError};
