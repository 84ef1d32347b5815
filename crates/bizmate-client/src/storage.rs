//! # Key-Value Storage
//!
//! Asynchronous string storage for the small amount of state the client
//! keeps on the device: language preference, session token, cached user
//! profile.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KeyValueStore (trait)                                │
//! │                     get / set / remove                                  │
//! │                 ┌──────────┴───────────┐                                │
//! │                 ▼                      ▼                                │
//! │          MemoryStore              FileStore                             │
//! │   process-local HashMap     JSON object in a single file,               │
//! │   (tests, ephemeral use)    rewritten on every change                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Storage Keys
// =============================================================================

/// The fixed keys the client stores values under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Selected UI language (`en` / `ar`).
    Language,
    /// Bearer token of the signed-in user.
    SessionToken,
    /// JSON-encoded profile of the signed-in user.
    UserProfile,
}

impl StorageKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Language => "app_language",
            StorageKey::SessionToken => "auth_token",
            StorageKey::UserProfile => "user_data",
        }
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Asynchronous string key-value storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: StorageKey) -> ClientResult<Option<String>>;

    async fn set(&self, key: StorageKey, value: &str) -> ClientResult<()>;

    async fn remove(&self, key: StorageKey) -> ClientResult<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-memory store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<&'static str, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: StorageKey) -> ClientResult<Option<String>> {
        Ok(self.values.read().await.get(key.as_str()).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> ClientResult<()> {
        self.values
            .write()
            .await
            .insert(key.as_str(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> ClientResult<()> {
        self.values.write().await.remove(key.as_str());
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// Stores all keys as one JSON object in a file.
///
/// The whole file is rewritten on every `set`/`remove` through a temp file
/// and a rename. The lock serializes writers within the process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Store in the platform data directory.
    ///
    /// - **macOS**: `~/Library/Application Support/com.bizmate.app/storage.json`
    /// - **Linux**: `~/.local/share/bizmate/storage.json`
    pub fn in_data_dir() -> ClientResult<Self> {
        let dirs = directories::ProjectDirs::from("com", "bizmate", "app")
            .ok_or_else(|| ClientError::Storage("Could not determine app data directory".into()))?;
        Ok(FileStore::new(dirs.data_dir().join("storage.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_contents(&self) -> ClientResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Storage(e.to_string())),
        }
    }

    async fn read_all(&self) -> ClientResult<HashMap<String, String>> {
        let Some(contents) = self.read_contents().await? else {
            return Ok(HashMap::new());
        };
        serde_json::from_str(&contents).map_err(|e| {
            warn!(path = ?self.path, error = %e, "Storage file is corrupt");
            ClientError::Storage(format!("corrupt storage file: {e}"))
        })
    }

    /// Current contents before a write. A corrupt file is replaced, so
    /// its values are dropped rather than blocking every later write.
    async fn read_for_update(&self) -> ClientResult<HashMap<String, String>> {
        let Some(contents) = self.read_contents().await? else {
            return Ok(HashMap::new());
        };
        Ok(serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = ?self.path, error = %e, "Replacing corrupt storage file");
            HashMap::new()
        }))
    }

    /// Writes to a sibling temp file and renames it over the store, so a
    /// crash mid-write leaves the previous file intact.
    async fn write_all(&self, values: &HashMap<String, String>) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ClientError::Storage(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(values)?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| ClientError::Storage(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ClientError::Storage(e.to_string()))?;

        debug!(path = ?self.path, keys = values.len(), "Storage file written");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: StorageKey) -> ClientResult<Option<String>> {
        let _guard = self.lock.read().await;
        Ok(self.read_all().await?.remove(key.as_str()))
    }

    async fn set(&self, key: StorageKey, value: &str) -> ClientResult<()> {
        let _guard = self.lock.write().await;
        let mut values = self.read_for_update().await?;
        values.insert(key.as_str().to_string(), value.to_string());
        self.write_all(&values).await
    }

    async fn remove(&self, key: StorageKey) -> ClientResult<()> {
        let _guard = self.lock.write().await;
        let mut values = self.read_for_update().await?;
        if values.remove(key.as_str()).is_some() {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("bizmate-store-{}", uuid::Uuid::new_v4()))
            .join("storage.json")
    }

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get(StorageKey::Language).await.unwrap(), None);

        store.set(StorageKey::Language, "ar").await.unwrap();
        assert_eq!(store.get(StorageKey::Language).await.unwrap().as_deref(), Some("ar"));

        store.remove(StorageKey::Language).await.unwrap();
        assert_eq!(store.get(StorageKey::Language).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_persists_across_instances() {
        let path = scratch_path();
        let store = FileStore::new(&path);
        assert_eq!(store.get(StorageKey::SessionToken).await.unwrap(), None);

        store.set(StorageKey::SessionToken, "tok-1").await.unwrap();
        store.set(StorageKey::Language, "en").await.unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get(StorageKey::SessionToken).await.unwrap().as_deref(),
            Some("tok-1")
        );

        reopened.remove(StorageKey::SessionToken).await.unwrap();
        assert_eq!(store.get(StorageKey::SessionToken).await.unwrap(), None);
        assert_eq!(store.get(StorageKey::Language).await.unwrap().as_deref(), Some("en"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_file_store_reports_corrupt_file() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get(StorageKey::Language).await,
            Err(ClientError::Storage(_))
        ));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_file_store_write_leaves_no_temp_file() {
        let path = scratch_path();
        let store = FileStore::new(&path);
        store.set(StorageKey::Language, "ar").await.unwrap();
        store.set(StorageKey::Language, "en").await.unwrap();

        assert!(!store.tmp_path().exists());
        let contents = std::fs::read_to_string(&path).unwrap();
        let values: HashMap<String, String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(values.get("app_language").map(String::as_str), Some("en"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn test_file_store_recovers_from_truncated_file() {
        let path = scratch_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"app_language": "ar", "auth_tok"#).unwrap();

        let store = FileStore::new(&path);
        assert!(store.get(StorageKey::Language).await.is_err());

        store.set(StorageKey::SessionToken, "tok-2").await.unwrap();
        assert_eq!(
            store.get(StorageKey::SessionToken).await.unwrap().as_deref(),
            Some("tok-2")
        );
        assert_eq!(store.get(StorageKey::Language).await.unwrap(), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
