//! Durable and in-memory implementations of the token slot.

use async_trait::async_trait;
use campus_core::error::{CampusError, Result};
use campus_core::session::TokenStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::atomic_json::AtomicJsonFile;
use crate::paths::CampusPaths;

/// On-disk shape of `session.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Token store backed by `session.json` in the campus config directory.
///
/// Writes go through [`AtomicJsonFile`] on the blocking pool, so a crash
/// mid-write never leaves a truncated credential behind.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    file: AtomicJsonFile<StoredToken>,
}

impl FileTokenStore {
    /// Creates a store at the default location (`~/.config/campus/session.json`).
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(CampusPaths::token_file()?))
    }

    /// Creates a store with a custom path (config override, tests).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }

    async fn blocking<R, F>(&self, op: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(AtomicJsonFile<StoredToken>) -> Result<R> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || op(file))
            .await
            .map_err(|e| CampusError::internal(format!("token store task failed: {e}")))?
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        self.blocking(|file| {
            Ok(file
                .load()?
                .map(|stored| stored.token)
                .filter(|token| !token.trim().is_empty()))
        })
        .await
    }

    async fn save(&self, token: &str) -> Result<()> {
        let stored = StoredToken {
            token: token.to_string(),
        };
        self.blocking(move |file| Ok(file.save(&stored)?)).await?;
        tracing::debug!(path = %self.path().display(), "Stored session token");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.blocking(|file| Ok(file.remove()?)).await?;
        tracing::debug!(path = %self.path().display(), "Cleared session token");
        Ok(())
    }
}

/// Token store that lives only as long as the process.
///
/// Used for `--ephemeral` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Synchronous peek, for assertions.
    pub fn current(&self) -> Option<String> {
        self.slot().clone()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.current())
    }

    async fn save(&self, token: &str) -> Result<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::with_path(temp_dir.path().join("session.json"));

        assert_eq!(store.load().await.unwrap(), None);

        store.save("tok-123").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("tok-123"));

        // A second instance sees the same slot, as a restarted process would.
        let reopened = FileTokenStore::with_path(store.path().to_path_buf());
        assert_eq!(reopened.load().await.unwrap().as_deref(), Some("tok-123"));

        store.clear().await.unwrap();
        assert_eq!(reopened.load().await.unwrap(), None);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_file_store_clear_when_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileTokenStore::with_path(temp_dir.path().join("session.json"));
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_ignores_blank_token() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, r#"{"token": "  "}"#).unwrap();
        let store = FileTokenStore::with_path(path);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileTokenStore::with_path(path);
        assert!(matches!(
            store.load().await,
            Err(CampusError::Serialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.load().await.unwrap().as_deref(), Some("abc"));
        store.clear().await.unwrap();
        assert_eq!(store.current(), None);
        store.save("def").await.unwrap();
        assert_eq!(store.current().as_deref(), Some("def"));
    }
}
