//! concierge_client - HTTP transport for the hotel concierge backend
//!
//! Implements [`chat_core::ChatTransport`] over reqwest against the
//! backend REST API: `POST /chat`, `DELETE /chat/session/{id}` and
//! `GET /health`.

pub mod client;

pub use client::ConciergeClient;
