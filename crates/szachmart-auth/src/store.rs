//! The single durable token slot.
//!
//! At most one access token exists at a time: saving overwrites, clearing
//! empties. The file-backed implementation is what gives the slot its
//! survives-a-restart durability; the in-memory one exists for tests and
//! embedding.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use szachmart_core::error::AppError;

/// A named slot holding the raw access token string.
pub trait TokenStore: Send + Sync {
    /// Reads the stored token, if any.
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Stores a token, replacing any previous one.
    fn save(&self, token: &str) -> Result<(), AppError>;

    /// Removes the stored token. Clearing an empty slot is a no-op.
    fn clear(&self) -> Result<(), AppError>;
}

/// File-backed token slot.
///
/// The token survives process restarts, matching the durability of the
/// browser storage slot it stands in for.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    /// Path of the slot file.
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store persisting at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                szachmart_core::error::ErrorKind::Storage,
                format!("Failed to read token slot: {e}"),
                e,
            )),
        }
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                szachmart_core::error::ErrorKind::Storage,
                format!("Failed to clear token slot: {e}"),
                e,
            )),
        }
    }
}

/// In-memory token slot behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    /// Current slot contents.
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self
            .slot
            .lock()
            .map_err(|_| AppError::internal("Token slot mutex poisoned"))?
            .clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        *self
            .slot
            .lock()
            .map_err(|_| AppError::internal("Token slot mutex poisoned"))? =
            Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        *self
            .slot
            .lock()
            .map_err(|_| AppError::internal("Token slot mutex poisoned"))? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_overwrite_semantics() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap(), Some("second".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Clearing an empty slot is a no-op
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));

        assert_eq!(store.load().unwrap(), None);
        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().unwrap(), Some("abc.def.ghi".to_string()));

        // A second store at the same path sees the token: the slot is durable
        let reopened = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(reopened.load().unwrap(), Some("abc.def.ghi".to_string()));

        store.clear().unwrap();
        assert_eq!(reopened.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested/dir/token"));
        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap(), Some("tok".to_string()));
    }
}
