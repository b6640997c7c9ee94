//! Local filesystem storage backend
//!
//! Each slot is a `<key>.json` file in the base directory.
//! All operations complete immediately (synchronous).

use super::{KeyValueStore, StorageError};
use std::path::PathBuf;

/// Local filesystem storage backend
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding one file per slot
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a file backend rooted at a custom directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create a file backend in the platform data directory
    /// (`~/.local/share/star-jar` on Linux, `%APPDATA%\star-jar` on Windows)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::with_base_dir(dir.join("star-jar")))
    }

    /// Resolve a slot key to its file path.
    ///
    /// Anything that isn't alphanumeric, `-` or `_` becomes `_` so a key can
    /// never escape the base directory.
    fn resolve(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{}.json", file_stem))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.resolve(key);
        match std::fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::Encoding(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.resolve(key);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.resolve(key)) {
            Ok(()) => Ok(()),
            // Not found is OK for delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn label(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, FileStorage) {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::with_base_dir(dir.path());
        (dir, storage)
    }

    #[test]
    fn test_set_and_get() {
        let (_dir, mut storage) = setup_test_dir();

        storage.set("lucky-stars", "[]").unwrap();
        assert_eq!(storage.get("lucky-stars").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_get_missing_is_none() {
        let (_dir, storage) = setup_test_dir();
        assert_eq!(storage.get("nothing-here").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, mut storage) = setup_test_dir();

        storage.set("slot", "first").unwrap();
        storage.set("slot", "second").unwrap();
        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let (dir, mut storage) = setup_test_dir();

        storage.set("delete-me", "x").unwrap();
        assert!(dir.path().join("delete-me.json").exists());

        storage.remove("delete-me").unwrap();
        assert!(!dir.path().join("delete-me.json").exists());

        // Removing again should be OK
        storage.remove("delete-me").unwrap();
    }

    #[test]
    fn test_key_cannot_escape_base_dir() {
        let (dir, mut storage) = setup_test_dir();

        storage.set("../escape", "x").unwrap();
        assert!(dir.path().join("___escape.json").exists());
    }

    #[test]
    fn test_set_creates_base_dir() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::with_base_dir(dir.path().join("deep/nested"));

        storage.set("slot", "data").unwrap();
        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("data"));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let (dir, storage) = setup_test_dir();

        std::fs::write(dir.path().join("bad.json"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(storage.get("bad"), Err(StorageError::Encoding(_))));
    }
}
