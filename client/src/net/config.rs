//! Socket endpoint resolution.
//!
//! The WebSocket base URL is resolved in priority order: a localStorage
//! override, then the page's own origin, then a localhost default. The
//! http(s) scheme is mapped to ws(s) before the room path is appended.

use thiserror::Error;

/// localStorage key holding an optional base-URL override.
pub const ENDPOINT_STORAGE_KEY: &str = "sketchroom:endpoint";

/// Fallback base URL when no override or page origin is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url has no recognizable scheme: {0}")]
    InvalidBaseUrl(String),
}

/// Map an http(s) or ws(s) base URL to the WebSocket URL for `room_id`.
///
/// Trailing slashes on the base are tolerated. Any other scheme is an error
/// rather than a silent guess.
pub fn ws_url(base: &str, room_id: &str) -> Result<String, ConfigError> {
    let trimmed = base.trim_end_matches('/');
    let ws_base = if let Some(rest) = trimmed.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if trimmed.starts_with("wss://") || trimmed.starts_with("ws://") {
        trimmed.to_owned()
    } else {
        return Err(ConfigError::InvalidBaseUrl(base.to_owned()));
    };
    Ok(format!("{ws_base}/ws/{room_id}"))
}

/// Resolve the effective base URL for socket connections.
///
/// Checks the localStorage override first so deployments behind a separate
/// socket host can repoint the client without a rebuild.
pub fn resolve_base_url() -> String {
    if let Some(stored) = crate::util::storage::load_json::<String>(ENDPOINT_STORAGE_KEY) {
        let stored = stored.trim().to_owned();
        if !stored.is_empty() {
            return stored;
        }
    }

    #[cfg(feature = "hydrate")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }

    DEFAULT_BASE_URL.to_owned()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
