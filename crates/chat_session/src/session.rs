//! Conversation session store
//!
//! Owns the ordered message history, the pending-request flag and the
//! generation counter. All mutation goes through the methods here; the
//! controller is the only caller.

use chat_core::{BookingInfo, HotelInfo, Message};
use serde::{Deserialize, Serialize};

/// One conversation's state.
///
/// Invariants:
/// - history is append-only; only [`ChatSession::reset`] shortens it
/// - at most one request is pending at a time
/// - the generation counter moves only on reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: bool,
    generation: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session seeded with the greeting message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::greeting()],
            pending: false,
            generation: 0,
        }
    }

    /// Ordered history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Current generation. Incremented on every reset; a send whose
    /// snapshot no longer matches must drop its response.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message. A session is never empty, so this only
    /// returns `None` on a deserialized session with corrupt history.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Append a user message. Rejects whitespace-only text; the
    /// controller filters this earlier, the store enforces it too.
    pub fn append_user(&mut self, text: &str) -> crate::Result<&Message> {
        if text.trim().is_empty() {
            return Err(crate::SessionError::EmptyMessage);
        }
        self.messages.push(Message::user(text));
        Ok(self.messages.last().expect("just pushed"))
    }

    /// Append an assistant message. Assistant text is not validated;
    /// apology/error text is a legitimate reply.
    pub fn append_assistant(
        &mut self,
        text: impl Into<String>,
        booking_info: Option<BookingInfo>,
        hotels: Option<Vec<HotelInfo>>,
    ) -> &Message {
        self.messages.push(Message::assistant(text, booking_info, hotels));
        self.messages.last().expect("just pushed")
    }

    /// Flip the pending flag. Setting it while already set means two
    /// sends overlapped, which the controller must never allow.
    pub fn set_pending(&mut self, pending: bool) -> crate::Result<()> {
        if pending && self.pending {
            return Err(crate::SessionError::AlreadyPending);
        }
        self.pending = pending;
        Ok(())
    }

    /// Discard all history, reseed the greeting and clear the pending
    /// flag. Bumps the generation so an in-flight reply is dropped on
    /// arrival instead of resurrecting the cleared conversation.
    pub fn reset(&mut self) {
        self.messages = vec![Message::greeting()];
        self.pending = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::{BookingStatus, Sender, GREETING_TEXT};

    #[test]
    fn new_session_is_seeded_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].content, GREETING_TEXT);
        assert_eq!(session.messages()[0].sender, Sender::Assistant);
        assert!(!session.is_pending());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn append_user_rejects_whitespace_only_text() {
        let mut session = ChatSession::new();
        assert_eq!(
            session.append_user("   "),
            Err(crate::SessionError::EmptyMessage)
        );
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn appends_grow_history_in_order() {
        let mut session = ChatSession::new();
        session.append_user("Book a room").unwrap();
        session.append_assistant("Done", None, None);

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
        assert_eq!(session.messages()[1].content, "Book a room");
        assert_eq!(session.messages()[2].content, "Done");
    }

    #[test]
    fn assistant_message_carries_booking_info() {
        let mut session = ChatSession::new();
        let info = BookingInfo {
            booking_id: "B-1".to_string(),
            hotel_name: "Lotus Inn".to_string(),
            city: "Chennai".to_string(),
            check_in: "2024-05-01".to_string(),
            check_out: "2024-05-03".to_string(),
            guests: 2,
            status: BookingStatus::Confirmed,
            total_price: Some(5400.0),
        };
        let msg = session.append_assistant("Here is your confirmation", Some(info.clone()), None);
        assert_eq!(msg.booking_info.as_ref(), Some(&info));
    }

    #[test]
    fn double_set_pending_is_rejected() {
        let mut session = ChatSession::new();
        session.set_pending(true).unwrap();
        assert_eq!(
            session.set_pending(true),
            Err(crate::SessionError::AlreadyPending)
        );
        // Clearing always succeeds, repeatedly.
        session.set_pending(false).unwrap();
        session.set_pending(false).unwrap();
    }

    #[test]
    fn reset_restores_initial_state_and_bumps_generation() {
        let mut session = ChatSession::new();
        session.append_user("Hello").unwrap();
        session.append_assistant("Hi", None, None);
        session.set_pending(true).unwrap();

        session.reset();

        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].content, GREETING_TEXT);
        assert!(!session.is_pending());
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn reset_is_idempotent_with_fresh_greeting_identity() {
        let mut session = ChatSession::new();
        session.reset();
        let first_id = session.messages()[0].id;
        session.reset();
        let second_id = session.messages()[0].id;

        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].content, GREETING_TEXT);
        assert_ne!(first_id, second_id);
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn message_ids_are_unique_within_a_session() {
        let mut session = ChatSession::new();
        session.append_user("one").unwrap();
        session.append_assistant("two", None, None);
        session.append_user("three").unwrap();

        let mut ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), session.len());
    }
}
