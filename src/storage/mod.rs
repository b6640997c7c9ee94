//! Storage Abstraction Layer
//!
//! Key-value slots for persisted app state. One slot holds one serialized
//! document; callers always read and rewrite a slot in full.
//!
//! Backends:
//! - `BrowserStorage` → `window.localStorage` through the JS plugin (WASM)
//! - `FileStorage` → one file per slot under the platform data dir (native)
//! - `MemoryStorage` → in-process map (tests, or when no data dir exists)
//!
//! All operations complete synchronously, which fits macroquad's
//! single-threaded frame loop.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod local;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStorage;
pub use local::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Storage error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
    /// Backend refused the write (browser quota, private mode)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Slot content is not valid UTF-8
    #[error("slot is not valid UTF-8: {0}")]
    Encoding(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::Io(e.to_string()),
        }
    }
}

/// A named-slot key-value store.
///
/// A missing slot is `Ok(None)`, not an error.
pub trait KeyValueStore {
    /// Read a slot
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite a slot
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot (deleting a missing slot is fine)
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    /// Human-readable backend name for logs
    fn label(&self) -> &'static str;
}

/// The platform's persistent backend.
///
/// Falls back to an in-memory store when the native data directory can't be
/// resolved, so the app still runs (stars just don't survive a restart).
pub fn default_backend() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(BrowserStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use macroquad::logging::warn;
        match FileStorage::in_data_dir() {
            Some(storage) => Box::new(storage),
            None => {
                warn!("Storage: no data directory, stars will not persist");
                Box::new(MemoryStorage::new())
            }
        }
    }
}
