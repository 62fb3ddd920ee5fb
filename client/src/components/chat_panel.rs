//! Real-time room chat panel displaying and sending messages.

use leptos::prelude::*;

use crate::app::EventSender;
use crate::state::chat::{ChatState, prepare_outgoing};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

/// Chat panel showing message history and an input for sending new messages.
///
/// Sends are optimistic: a valid message is appended locally before the
/// socket confirms anything, and the broadcast echo later dedupes on id.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let sender = expect_context::<RwSignal<EventSender>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the scroll position to the newest message whenever one arrives.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let s = session.get();
        let Some(msg) = prepare_outgoing(&input.get(), &s.username) else {
            ui.update(|u| {
                u.push_error("Message cannot be empty");
            });
            return;
        };

        let room_id = s.room_id.unwrap_or_default();
        if !sender.get().send(&msg.to_event(&room_id)) {
            ui.update(|u| {
                u.push_error("Connection not established.");
            });
            return;
        }

        chat.update(|c| c.append_local(msg));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let placeholder = move || {
        let username = session.get().username;
        if username.is_empty() {
            "Message...".to_owned()
        } else {
            format!("Message as {username}...")
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">"No messages yet"</div>
                        }
                            .into_any();
                    }

                    let own_name = session.get().username;
                    messages
                        .iter()
                        .map(|msg| {
                            let class = if msg.username == own_name {
                                "chat-panel__message chat-panel__message--own"
                            } else {
                                "chat-panel__message"
                            };
                            let name = msg.username.clone();
                            let text = msg.message.clone();
                            view! {
                                <div class=class>
                                    <span class="chat-panel__author">{name}</span>
                                    <span class="chat-panel__text">{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
