//! Room page — the main layout: shared whiteboard plus chat panel.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::EventSender;
use crate::components::chat_panel::ChatPanel;
use crate::components::notice_stack::NoticeStack;
use crate::components::whiteboard::Whiteboard;
use crate::state::chat::ChatState;
use crate::state::session::{ConnectionStatus, SessionState};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::net::socket::socket_chat::handle_chat_event;
#[cfg(feature = "hydrate")]
use crate::net::socket::{RoomSocket, spawn_socket};

/// Room page.
///
/// Reads the room id from the route, opens the chat socket for it, and
/// publishes the live sender through context so the chat panel can emit.
/// The whiteboard manages its own socket. Leaving the room tears both down
/// and clears room-scoped state.
#[component]
pub fn RoomPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<EventSender>>();
    let params = use_params_map();

    let room_id = move || params.read().get("id");

    // Track the active room on the session.
    Effect::new(move || {
        let id = room_id();
        session.update(|s| s.room_id.clone_from(&id));
    });

    // Back to the join page when there is no display name to post under.
    let navigate = use_navigate();
    Effect::new(move || {
        if session.get().username.is_empty() {
            navigate("/", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let guard_cell = Rc::new(RefCell::new(None::<RoomSocket>));

        let guard_for_spawn = Rc::clone(&guard_cell);
        Effect::new(move || {
            let Some(id) = room_id() else {
                return;
            };
            if guard_for_spawn
                .borrow()
                .as_ref()
                .is_some_and(|socket| socket.serves(&id))
            {
                return;
            }
            // A direct room-to-room navigation reuses this mounted page, so
            // drop the stale socket and the old room's messages first.
            if guard_for_spawn.borrow_mut().take().is_some() {
                sender.set(EventSender::default());
                chat.update(|c| c.messages.clear());
            }

            let on_event = move |event: &events::Event| {
                handle_chat_event(event, chat);
            };
            let (tx, guard) = spawn_socket(id.clone(), session, on_event);
            sender.set(tx);
            *guard_for_spawn.borrow_mut() = Some(RoomSocket::new(id, guard));
        });

        on_cleanup(move || {
            guard_cell.borrow_mut().take();
        });
    }

    on_cleanup(move || {
        sender.set(EventSender::default());
        chat.update(|c| c.messages.clear());
        session.update(|s| {
            s.room_id = None;
            s.connection_status = ConnectionStatus::Disconnected;
        });
    });

    view! {
        <div class="room-page">
            <header class="room-page__header">
                <h1 class="room-page__title">
                    {move || room_id().unwrap_or_default()}
                </h1>
                <span class="room-page__status">
                    {move || session.get().connection_status.label()}
                </span>
            </header>
            <div class="room-page__board">
                <Whiteboard/>
            </div>
            <div class="room-page__chat">
                <ChatPanel/>
            </div>
            <NoticeStack/>
        </div>
    }
}
