//! Reactive application state shared through Leptos contexts.

pub mod chat;
pub mod session;
pub mod strokes;
pub mod ui;
