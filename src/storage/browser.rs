//! Browser localStorage backend (WASM only)
//!
//! Talks to the `starjar_storage_*` functions the JS plugin in
//! `web/index.html` registers with miniquad.

use super::{KeyValueStore, StorageError};

// ─────────────────────────────────────────────────────────────────────────────
// FFI bindings to the JavaScript storage plugin
// ─────────────────────────────────────────────────────────────────────────────

extern "C" {
    /// Byte length of the stored value, or -1 when the slot is missing
    fn starjar_storage_len(key_ptr: *const u8, key_len: usize) -> i32;
    fn starjar_storage_copy(key_ptr: *const u8, key_len: usize, dest_ptr: *mut u8, max_len: usize) -> usize;
    /// 0 on success, nonzero when localStorage threw (quota, private mode)
    fn starjar_storage_set(key_ptr: *const u8, key_len: usize, val_ptr: *const u8, val_len: usize) -> i32;
    fn starjar_storage_remove(key_ptr: *const u8, key_len: usize);
}

/// `window.localStorage` through the JS plugin
#[derive(Debug, Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let len = unsafe { starjar_storage_len(key.as_ptr(), key.len()) };
        if len < 0 {
            return Ok(None);
        }

        let mut buffer = vec![0u8; len as usize];
        let copied = unsafe {
            starjar_storage_copy(key.as_ptr(), key.len(), buffer.as_mut_ptr(), buffer.len())
        };
        buffer.truncate(copied);

        String::from_utf8(buffer)
            .map(Some)
            .map_err(|e| StorageError::Encoding(e.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let status = unsafe {
            starjar_storage_set(key.as_ptr(), key.len(), value.as_ptr(), value.len())
        };
        if status == 0 {
            Ok(())
        } else {
            Err(StorageError::Unavailable(format!("localStorage.setItem failed for {}", key)))
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        unsafe { starjar_storage_remove(key.as_ptr(), key.len()) };
        Ok(())
    }

    fn label(&self) -> &'static str {
        "localStorage"
    }
}
