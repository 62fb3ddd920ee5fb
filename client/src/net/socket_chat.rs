//! Chat event handlers extracted from `socket`.

#[cfg(test)]
#[path = "socket_chat_test.rs"]
mod socket_chat_test;

use events::{Event, Payload};
use leptos::prelude::{RwSignal, Update};

use crate::state::chat::{ChatMessage, ChatState};

/// Turn an inbound chat event into a [`ChatMessage`].
///
/// Non-chat payloads are ignored. Events with no sender tag are attributed
/// to "anonymous" rather than dropped.
pub fn parse_chat_event(event: &Event) -> Option<ChatMessage> {
    let Payload::Chat { message } = &event.payload else {
        return None;
    };
    Some(ChatMessage {
        id: event.id.clone(),
        username: event
            .from
            .clone()
            .unwrap_or_else(|| "anonymous".to_owned()),
        message: message.clone(),
        ts: event.ts,
    })
}

/// Apply an inbound event to chat state.
///
/// Returns `true` when the event was a chat message, whether or not it was
/// appended (echoes of our own optimistic sends dedupe on message id).
pub fn handle_chat_event(event: &Event, chat: RwSignal<ChatState>) -> bool {
    let Some(msg) = parse_chat_event(event) else {
        return false;
    };
    chat.update(|c| {
        c.append_remote(msg);
    });
    true
}
