//! Routed pages.

pub mod join;
pub mod room;
