//! Platform abstraction layer
//!
//! Handles browser/native differences for storage (LocalStorage on web,
//! in-memory on native).

#[cfg(target_arch = "wasm32")]
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;

/// Store used by the current platform's host
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = storage::LocalStorageStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = crate::persistence::MemoryStore;
