//! Session storage trait and implementations

use crate::error::{Result, SessionError};
use crate::structs::SessionState;
use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::sync::Mutex;

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Session ids arrive from cookies, so only a conservative alphabet is accepted.
pub fn is_valid_session_id(session_id: &str) -> bool {
    !session_id.is_empty()
        && session_id.len() <= 64
        && session_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn check_session_id(session_id: &str) -> Result<()> {
    if is_valid_session_id(session_id) {
        Ok(())
    } else {
        Err(SessionError::InvalidId(session_id.to_string()))
    }
}

/// Session storage trait
#[async_trait]
pub trait SessionStorage: Send + Sync {
    /// Load a session
    async fn load_session(&self, session_id: &str) -> Result<SessionState>;

    /// Save a session
    async fn save_session(&self, session_id: &str, session: &SessionState) -> Result<()>;

    /// Check if a session exists
    async fn session_exists(&self, session_id: &str) -> bool;

    /// Delete a session
    async fn delete_session(&self, session_id: &str) -> Result<()>;
}

/// In-process session storage bounded by an LRU capacity
pub struct MemorySessionStorage {
    sessions: Mutex<LruCache<String, SessionState>>,
}

impl MemorySessionStorage {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Mutex::new(LruCache::new(capacity)),
        }
    }
}

#[async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn load_session(&self, session_id: &str) -> Result<SessionState> {
        self.sessions
            .lock()
            .await
            .get(session_id)
            .cloned()
            .ok_or(SessionError::NotFound)
    }

    async fn save_session(&self, session_id: &str, session: &SessionState) -> Result<()> {
        check_session_id(session_id)?;
        let evicted = self
            .sessions
            .lock()
            .await
            .push(session_id.to_string(), session.clone());
        if let Some((evicted_id, _)) = evicted {
            if evicted_id != session_id {
                tracing::debug!(session_id = %evicted_id, "Evicted least recently used session");
            }
        }
        Ok(())
    }

    async fn session_exists(&self, session_id: &str) -> bool {
        self.sessions.lock().await.contains(session_id)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        self.sessions.lock().await.pop(session_id);
        Ok(())
    }
}

/// File-based session storage, one JSON document per session
#[derive(Clone)]
pub struct FileSessionStorage {
    base_path: PathBuf,
}

impl FileSessionStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_path(&self, session_id: &str) -> Result<PathBuf> {
        check_session_id(session_id)?;
        Ok(self.base_path.join(format!("{}.json", session_id)))
    }

    /// Unique per write, so concurrent saves of one session never share a temp file.
    fn temp_path(&self, session_id: &str) -> PathBuf {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        self.base_path
            .join(format!("{}.json.{}.{}.tmp", session_id, std::process::id(), seq))
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn load_session(&self, session_id: &str) -> Result<SessionState> {
        let path = self.session_path(session_id)?;

        if !path.exists() {
            return Err(SessionError::NotFound);
        }

        let contents = fs::read_to_string(&path).await?;
        let session: SessionState = serde_json::from_str(&contents)?;

        Ok(session)
    }

    async fn save_session(&self, session_id: &str, session: &SessionState) -> Result<()> {
        let path = self.session_path(session_id)?;
        fs::create_dir_all(&self.base_path).await?;

        // Readers must only ever see a complete document, so write a private
        // temp file and rename it over the target.
        let contents = serde_json::to_string_pretty(session)?;
        let temp_path = self.temp_path(session_id);
        if let Err(e) = fs::write(&temp_path, contents).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn session_exists(&self, session_id: &str) -> bool {
        self.session_path(session_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    async fn delete_session(&self, session_id: &str) -> Result<()> {
        let path = self.session_path(session_id)?;

        if path.exists() {
            fs::remove_file(&path).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::TodoList;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_session_id_alphabet() {
        assert!(is_valid_session_id("3f2b9c1e-8d7a-4c1b-9e2f-0a1b2c3d4e5f"));
        assert!(!is_valid_session_id(""));
        assert!(!is_valid_session_id("../etc/passwd"));
        assert!(!is_valid_session_id(&"a".repeat(65)));
    }

    #[tokio::test]
    async fn test_file_storage_save_and_load() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());

        let mut session = SessionState::default();
        session.lists.push(TodoList::new(1, "Groceries"));
        storage.save_session("test", &session).await.unwrap();

        let loaded = storage.load_session("test").await.unwrap();
        assert_eq!(loaded.lists, session.lists);
    }

    #[tokio::test]
    async fn test_file_storage_not_found() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());

        let result = storage.load_session("nonexistent").await;
        assert!(matches!(result, Err(SessionError::NotFound)));
    }

    #[tokio::test]
    async fn test_file_storage_rejects_traversal() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());

        let result = storage
            .save_session("../outside", &SessionState::default())
            .await;
        assert!(matches!(result, Err(SessionError::InvalidId(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_file_storage_concurrent_save_and_load() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileSessionStorage::new(dir.path()));

        let mut session = SessionState::default();
        for id in 1..=200 {
            session.lists.push(TodoList::new(id, format!("List number {id}")));
        }
        storage.save_session("shared", &session).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let storage = Arc::clone(&storage);
            let session = session.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..200 {
                    storage.save_session("shared", &session).await.unwrap();
                }
                0usize
            }));
        }
        for _ in 0..4 {
            let storage = Arc::clone(&storage);
            handles.push(tokio::spawn(async move {
                let mut failures = 0;
                for _ in 0..200 {
                    match storage.load_session("shared").await {
                        Ok(loaded) => assert_eq!(loaded.lists.len(), 200),
                        Err(_) => failures += 1,
                    }
                }
                failures
            }));
        }

        let mut failures = 0;
        for handle in handles {
            failures += handle.await.unwrap();
        }
        assert_eq!(failures, 0);

        // No temp files are left behind.
        let mut entries = std::fs::read_dir(dir.path()).unwrap();
        assert!(entries.all(|e| !e.unwrap().file_name().to_string_lossy().ends_with(".tmp")));
    }

    #[tokio::test]
    async fn test_file_storage_delete() {
        let dir = tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path());

        storage
            .save_session("test", &SessionState::default())
            .await
            .unwrap();
        assert!(storage.session_exists("test").await);

        storage.delete_session("test").await.unwrap();
        assert!(!storage.session_exists("test").await);
    }

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemorySessionStorage::new(8);
        let mut session = SessionState::default();
        session.set_success("saved");
        storage.save_session("abc", &session).await.unwrap();

        let loaded = storage.load_session("abc").await.unwrap();
        assert_eq!(loaded.success.as_deref(), Some("saved"));
        assert!(matches!(
            storage.load_session("other").await,
            Err(SessionError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_memory_storage_evicts_least_recently_used() {
        let storage = MemorySessionStorage::new(2);
        let session = SessionState::default();

        storage.save_session("first", &session).await.unwrap();
        storage.save_session("second", &session).await.unwrap();
        // Touch "first" so "second" becomes the eviction candidate.
        storage.load_session("first").await.unwrap();
        storage.save_session("third", &session).await.unwrap();

        assert!(storage.session_exists("first").await);
        assert!(!storage.session_exists("second").await);
        assert!(storage.session_exists("third").await);
    }

    #[tokio::test]
    async fn test_memory_storage_zero_capacity_holds_one() {
        let storage = MemorySessionStorage::new(0);
        storage
            .save_session("only", &SessionState::default())
            .await
            .unwrap();
        assert!(storage.session_exists("only").await);
    }
}
