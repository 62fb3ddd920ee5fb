//! Networking: endpoint resolution and the per-room WebSocket client.

pub mod config;
pub mod socket;
