//! Conversation controller
//!
//! Sequences the send life-cycle (append user message, mark pending,
//! await transport, append reply or fallback, clear pending) and the
//! reset operation. The transport call is the only suspension point;
//! the session lock is never held across it.

use std::sync::Arc;

use chat_core::{ChatRequest, ChatTransport, FALLBACK_REPLY_TEXT};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::session::ChatSession;

/// What happened to a single `send` call. Every edge of the state
/// machine is observable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// A reply (or the fallback apology) was appended to history.
    Delivered,
    /// Input was empty after trimming; nothing changed.
    Ignored,
    /// Another send is still in flight; nothing changed.
    Busy,
    /// The session was reset while the request was on the wire; the
    /// late response was discarded.
    Stale,
}

/// Orchestrates sends and resets against a shared [`ChatSession`].
pub struct ChatController<T: ChatTransport> {
    session: Arc<RwLock<ChatSession>>,
    transport: Arc<T>,
    session_id: Option<String>,
}

impl<T: ChatTransport> Clone for ChatController<T> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
            transport: Arc::clone(&self.transport),
            session_id: self.session_id.clone(),
        }
    }
}

impl<T: ChatTransport + 'static> ChatController<T> {
    pub fn new(transport: T, session_id: Option<String>) -> Self {
        Self {
            session: Arc::new(RwLock::new(ChatSession::new())),
            transport: Arc::new(transport),
            session_id,
        }
    }

    /// A point-in-time copy of the session for rendering.
    pub async fn snapshot(&self) -> ChatSession {
        self.session.read().await.clone()
    }

    /// Send one user message and resolve it to exactly one outcome.
    ///
    /// Concurrent sends are rejected, not queued: callers get
    /// [`SendOutcome::Busy`] while a request is pending.
    pub async fn send(&self, raw: &str) -> crate::Result<SendOutcome> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            debug!("ignoring empty input");
            return Ok(SendOutcome::Ignored);
        }

        let generation = {
            let mut session = self.session.write().await;
            if session.is_pending() {
                debug!("send rejected, a request is already in flight");
                return Ok(SendOutcome::Busy);
            }
            session.append_user(trimmed)?;
            session.set_pending(true)?;
            session.generation()
        };

        let request = ChatRequest {
            message: trimmed.to_string(),
            session_id: self.session_id.clone(),
        };
        let result = self.transport.send_message(request).await;

        let mut session = self.session.write().await;
        if session.generation() != generation {
            // Reset happened while we were on the wire; the cleared
            // conversation must not be resurrected by a late reply.
            debug!(generation, "discarding reply for a reset session");
            return Ok(SendOutcome::Stale);
        }

        match result {
            Ok(response) => {
                session.append_assistant(response.message, response.booking_info, response.hotels);
            }
            Err(err) => {
                warn!(error = %err, "transport failure, substituting fallback reply");
                session.append_assistant(FALLBACK_REPLY_TEXT, None, None);
            }
        }
        session.set_pending(false)?;
        Ok(SendOutcome::Delivered)
    }

    /// Wipe the conversation back to the seeded greeting. Does not
    /// abort an in-flight request; its reply is dropped on arrival.
    /// When a session id is configured the server-side history purge
    /// runs fire-and-forget.
    pub async fn reset(&self) {
        self.session.write().await.reset();

        if let Some(session_id) = self.session_id.clone() {
            let transport = Arc::clone(&self.transport);
            tokio::spawn(async move {
                if let Err(err) = transport.clear_session(&session_id).await {
                    debug!(error = %err, "server-side session clear failed");
                }
            });
        }
    }
}
