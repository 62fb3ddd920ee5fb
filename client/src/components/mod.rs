//! UI components for the room view.

pub mod chat_panel;
pub mod notice_stack;
pub mod whiteboard;
