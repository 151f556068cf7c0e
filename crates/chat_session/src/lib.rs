//! chat_session - Conversation session state machine
//!
//! This crate owns the rules of a single conversation: how messages are
//! appended, how the single in-flight request is tracked, and how a
//! reset interacts with a request that is still on the wire.

pub mod controller;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use controller::{ChatController, SendOutcome};
pub use error::{Result, SessionError};
pub use session::ChatSession;
