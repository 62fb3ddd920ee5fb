//! Chat panel state: the locally-owned ordered message list and the
//! optimistic-send / echo-deduplication rules.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use events::{Event, Payload};

use crate::util::time::now_ms;

/// State for the room chat panel.
///
/// The message list is append-only in arrival order; the only mutation
/// besides appending is deduplicating the broadcast echo of our own send.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Client-generated identifier (UUID string), shared with the wire event
    /// so the sender recognizes its own echo.
    pub id: String,
    pub username: String,
    pub message: String,
    pub ts: i64,
}

impl ChatMessage {
    /// Build the wire event carrying this message into `room_id`.
    #[must_use]
    pub fn to_event(&self, room_id: &str) -> Event {
        Event {
            id: self.id.clone(),
            ts: self.ts,
            room_id: room_id.to_owned(),
            from: Some(self.username.clone()),
            payload: Payload::Chat {
                message: self.message.clone(),
            },
        }
    }
}

impl ChatState {
    /// Append an optimistic local copy of an outgoing message.
    pub fn append_local(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
    }

    /// Append an inbound message unless its id is already present.
    ///
    /// The server echoes a sender's own message back to it; the shared id
    /// collapses that echo onto the optimistic copy. Returns whether the
    /// visible list changed.
    pub fn append_remote(&mut self, msg: ChatMessage) -> bool {
        if self.messages.iter().any(|existing| existing.id == msg.id) {
            return false;
        }
        self.messages.push(msg);
        true
    }
}

/// Validate and build an outgoing message from raw input.
///
/// Trims the text first; returns `None` for empty or whitespace-only input,
/// which callers surface as a user-visible notice rather than a send.
#[must_use]
pub fn prepare_outgoing(input: &str, username: &str) -> Option<ChatMessage> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_owned(),
        message: trimmed.to_owned(),
        ts: now_ms(),
    })
}
