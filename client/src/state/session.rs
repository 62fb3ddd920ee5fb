#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session-level state: who the user is, which room is active, and whether
/// the chat socket is up.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub username: String,
    pub room_id: Option<String>,
    pub connection_status: ConnectionStatus,
}

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionStatus {
    /// Short label for status indicators.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        }
    }
}
