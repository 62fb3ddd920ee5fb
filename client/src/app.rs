//! Root application component with routing, context providers, and the
//! shared [`EventSender`] handle type.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{join::JoinPage, room::RoomPage};
use crate::state::{chat::ChatState, session::SessionState, ui::UiState};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Handle for emitting events onto a room socket.
///
/// Cloneable and cheap. [`EventSender::send`] reports failure instead of
/// panicking so callers can surface a user-visible notice when the transport
/// handle is absent or the connection has gone away.
#[derive(Clone, Default)]
pub struct EventSender {
    #[cfg(any(test, feature = "hydrate"))]
    tx: Option<futures::channel::mpsc::UnboundedSender<Vec<u8>>>,
}

impl EventSender {
    /// Wrap the outbound byte channel of a live socket task.
    #[cfg(any(test, feature = "hydrate"))]
    #[must_use]
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<Vec<u8>>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Whether a live transport handle exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        #[cfg(any(test, feature = "hydrate"))]
        {
            self.tx.as_ref().is_some_and(|tx| !tx.is_closed())
        }
        #[cfg(not(any(test, feature = "hydrate")))]
        {
            false
        }
    }

    /// Encode and send an event.
    ///
    /// Returns `false` when no transport handle exists or the socket task has
    /// hung up its end of the channel.
    pub fn send(&self, event: &events::Event) -> bool {
        #[cfg(any(test, feature = "hydrate"))]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(events::encode_event(event)).is_ok())
        }
        #[cfg(not(any(test, feature = "hydrate")))]
        {
            let _ = event;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. The chat
    // socket sender lives here too; the room page swaps in a live handle.
    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());
    let sender = RwSignal::new(EventSender::default());

    provide_context(session);
    provide_context(chat);
    provide_context(ui);
    provide_context(sender);

    view! {
        <Stylesheet id="leptos" href="/pkg/sketchroom.css"/>
        <Title text="Sketchroom"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=JoinPage/>
                <Route path=(StaticSegment("room"), ParamSegment("id")) view=RoomPage/>
            </Routes>
        </Router>
    }
}
