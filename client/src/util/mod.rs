//! Small shared helpers: clocks, pointer mapping, storage.

pub mod pointer;
pub mod storage;
pub mod time;
