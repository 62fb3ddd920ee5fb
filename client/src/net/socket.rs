//! Per-room WebSocket client.
//!
//! Each consumer (chat pane, whiteboard) spawns its own socket task for the
//! room it is showing. The task owns the connection lifecycle: connect,
//! decode inbound events, forward outbound bytes, and reconnect with
//! exponential backoff. A [`SocketGuard`] cancels the task when the owning
//! component unmounts, so a torn-down view never keeps a connection alive.
//!
//! All transport logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[path = "socket_chat.rs"]
pub mod socket_chat;
#[path = "socket_draw.rs"]
pub mod socket_draw;

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

use crate::app::EventSender;
#[cfg(feature = "hydrate")]
use crate::net::config;
#[cfg(feature = "hydrate")]
use crate::state::session::ConnectionStatus;
use crate::state::session::SessionState;

/// Cancellation handle for a spawned socket task.
///
/// Dropping the guard tears the task down, including mid-backoff. Stash it in
/// `on_cleanup` so unmounting the component closes the connection.
pub struct SocketGuard {
    #[cfg(any(test, feature = "hydrate"))]
    cancel: Option<futures::channel::oneshot::Sender<()>>,
}

impl Drop for SocketGuard {
    fn drop(&mut self) {
        #[cfg(any(test, feature = "hydrate"))]
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}

/// A live socket bound to one room.
///
/// The room page keeps the component mounted when only the `:id` param
/// changes, so spawn effects key their guard by room id and replace the
/// socket when it no longer serves the room on screen.
pub struct RoomSocket {
    room_id: String,
    // Held for its drop behavior.
    _guard: SocketGuard,
}

impl RoomSocket {
    #[must_use]
    pub fn new(room_id: String, guard: SocketGuard) -> Self {
        Self {
            room_id,
            _guard: guard,
        }
    }

    /// Whether this socket was spawned for `room_id`.
    #[must_use]
    pub fn serves(&self, room_id: &str) -> bool {
        self.room_id == room_id
    }
}

/// Spawn the socket lifecycle for `room_id` as a local async task.
///
/// Inbound events that pass the room filter are handed to `on_event`. The
/// returned sender carries outbound events; the guard cancels the task.
pub fn spawn_socket(
    room_id: String,
    session: RwSignal<SessionState>,
    on_event: impl Fn(&events::Event) + 'static,
) -> (EventSender, SocketGuard) {
    #[cfg(feature = "hydrate")]
    {
        use futures::channel::{mpsc, oneshot};

        let (tx, rx) = mpsc::unbounded::<Vec<u8>>();
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        leptos::task::spawn_local(async move {
            let run = socket_loop(room_id, session, on_event, rx);
            futures::future::select(Box::pin(run), cancel_rx).await;
            session.update(|s| s.connection_status = ConnectionStatus::Disconnected);
        });

        (
            EventSender::new(tx),
            SocketGuard {
                cancel: Some(cancel_tx),
            },
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (room_id, session, &on_event);
        (
            EventSender::default(),
            SocketGuard {
                #[cfg(test)]
                cancel: None,
            },
        )
    }
}

#[cfg(any(test, feature = "hydrate"))]
const INITIAL_BACKOFF_MS: u32 = 1000;
#[cfg(any(test, feature = "hydrate"))]
const MAX_BACKOFF_MS: u32 = 10_000;
/// A connection that stayed up this long counts as healthy.
#[cfg(any(test, feature = "hydrate"))]
const STABLE_CONNECTION_MS: u64 = 5000;

/// Next reconnect delay.
///
/// Quick failures keep doubling toward the cap; losing a connection that had
/// been stable starts the schedule over instead of inheriting a stale delay.
#[cfg(any(test, feature = "hydrate"))]
fn next_backoff_ms(current_ms: u32, connected_for_ms: u64) -> u32 {
    if connected_for_ms >= STABLE_CONNECTION_MS {
        INITIAL_BACKOFF_MS
    } else {
        (current_ms * 2).min(MAX_BACKOFF_MS)
    }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn socket_loop(
    room_id: String,
    session: RwSignal<SessionState>,
    on_event: impl Fn(&events::Event),
    rx: futures::channel::mpsc::UnboundedReceiver<Vec<u8>>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::util::time::now_ms;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms = INITIAL_BACKOFF_MS;

    loop {
        session.update(|s| s.connection_status = ConnectionStatus::Connecting);

        let base = config::resolve_base_url();
        let url = match config::ws_url(&base, &room_id) {
            Ok(url) => url,
            Err(e) => {
                leptos::logging::warn!("socket url invalid: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = next_backoff_ms(backoff_ms, 0);
                continue;
            }
        };

        let attempt_started = now_ms();
        match connect_and_run(&url, &room_id, session, &on_event, &rx).await {
            Ok(()) => {
                leptos::logging::log!("socket disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("socket error: {e}");
            }
        }

        let connected_for_ms = now_ms().saturating_sub(attempt_started);
        session.update(|s| s.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = next_backoff_ms(backoff_ms, connected_for_ms);
    }
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    room_id: &str,
    session: RwSignal<SessionState>,
    on_event: &impl Fn(&events::Event),
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<Vec<u8>>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    // Forward outgoing bytes from our channel to the WS.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Bytes(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode incoming events and dispatch.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Bytes(bytes)) => match events::decode_event(&bytes) {
                    Ok(event) => {
                        if event_is_for_room(&event, room_id) {
                            on_event(&event);
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("socket decode error: {e}");
                    }
                },
                Ok(Message::Text(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Whether an inbound event belongs to the room this socket serves.
///
/// Events without a room tag are accepted; the server already scoped the
/// connection to one room, so an empty tag is not worth dropping over.
#[cfg(any(test, feature = "hydrate"))]
fn event_is_for_room(event: &events::Event, room_id: &str) -> bool {
    event.room_id.is_empty() || event.room_id == room_id
}

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;
