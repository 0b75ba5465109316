//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key and pointer normalized to one primary action)
//! - Storage (LocalStorage on web, files natively, memory for tests)
//! - The browser host loop (wasm32 only)

pub mod input;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputAdapter, KeyResponse, PRIMARY_KEY};
pub use storage::{KeyValueStore, MemoryStore};
