//! Short-lived per-session storage for uploaded scene files.
//!
//! Uploads live in memory only. Each browser session gets its own
//! bucket, capped in file size and total content, and entries are
//! pruned once they outlive [`MAX_AGE`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Largest accepted single upload, in bytes.
pub const MAX_FILE_SIZE: usize = 2_000_000;
/// Total content a single session may hold, in bytes.
pub const MAX_SESSION_CONTENT: usize = 10_000_000;
/// Uploads older than this are dropped by [`TempUploadStore::prune_expired`].
pub const MAX_AGE: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("upload of {size} bytes exceeds the per-file limit of {MAX_FILE_SIZE}")]
    FileTooLarge { size: usize },
    #[error("session upload quota of {MAX_SESSION_CONTENT} bytes exhausted")]
    SessionFull,
    #[error("no such upload")]
    NotFound,
}

#[derive(Debug, Clone)]
pub struct StoredUpload {
    pub name: String,
    pub content_type: String,
    pub content: Vec<u8>,
    uploaded: Instant,
}

/// In-memory upload store keyed by session id, then upload id.
#[derive(Default)]
pub struct TempUploadStore {
    sessions: Mutex<HashMap<String, HashMap<Uuid, StoredUpload>>>,
}

impl TempUploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an upload and returns its id. A re-upload of an
    /// identical file in the same session returns the existing id
    /// instead of storing a second copy.
    pub fn put(
        &self,
        session: &str,
        name: &str,
        content_type: &str,
        content: Vec<u8>,
    ) -> Result<Uuid, UploadError> {
        if content.len() > MAX_FILE_SIZE {
            return Err(UploadError::FileTooLarge {
                size: content.len(),
            });
        }
        let mut sessions = self.lock();
        let bucket = sessions.entry(session.to_owned()).or_default();
        if let Some((id, _)) = bucket
            .iter()
            .find(|(_, u)| u.name == name && u.content == content)
        {
            return Ok(*id);
        }
        let held: usize = bucket.values().map(|u| u.content.len()).sum();
        if held + content.len() > MAX_SESSION_CONTENT {
            return Err(UploadError::SessionFull);
        }
        let id = Uuid::new_v4();
        debug!(%id, name, size = content.len(), "stored upload");
        bucket.insert(
            id,
            StoredUpload {
                name: name.to_owned(),
                content_type: content_type.to_owned(),
                content,
                uploaded: Instant::now(),
            },
        );
        Ok(id)
    }

    pub fn get(&self, session: &str, id: Uuid) -> Option<StoredUpload> {
        self.lock().get(session)?.get(&id).cloned()
    }

    pub fn remove(&self, session: &str, id: Uuid) -> Result<StoredUpload, UploadError> {
        let mut sessions = self.lock();
        let bucket = sessions.get_mut(session).ok_or(UploadError::NotFound)?;
        let upload = bucket.remove(&id).ok_or(UploadError::NotFound)?;
        if bucket.is_empty() {
            sessions.remove(session);
        }
        Ok(upload)
    }

    /// Drops uploads past [`MAX_AGE`] and returns how many were removed.
    pub fn prune_expired(&self) -> usize {
        self.prune_older_than(MAX_AGE)
    }

    pub fn prune_older_than(&self, age: Duration) -> usize {
        let cutoff = Instant::now();
        let mut removed = 0;
        let mut sessions = self.lock();
        sessions.retain(|_, bucket| {
            let before = bucket.len();
            bucket.retain(|_, u| cutoff.duration_since(u.uploaded) < age);
            removed += before - bucket.len();
            !bucket.is_empty()
        });
        removed
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, HashMap<Uuid, StoredUpload>>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_retrieves_by_id() {
        let store = TempUploadStore::new();
        let id = store.put("s1", "scene.flame", "application/xml", b"<flame/>".to_vec()).unwrap();
        let upload = store.get("s1", id).unwrap();
        assert_eq!(upload.name, "scene.flame");
        assert_eq!(upload.content_type, "application/xml");
        assert_eq!(upload.content, b"<flame/>");
        assert!(store.get("other", id).is_none());
    }

    #[test]
    fn identical_reupload_returns_existing_id() {
        let store = TempUploadStore::new();
        let first = store.put("s1", "scene.flame", "application/xml", b"abc".to_vec()).unwrap();
        let second = store.put("s1", "scene.flame", "application/xml", b"abc".to_vec()).unwrap();
        assert_eq!(first, second);

        let third = store.put("s1", "scene.flame", "application/xml", b"abcd".to_vec()).unwrap();
        assert_ne!(first, third);
    }

    #[test]
    fn rejects_oversized_files() {
        let store = TempUploadStore::new();
        let err = store
            .put("s1", "big.flame", "application/xml", vec![0; MAX_FILE_SIZE + 1])
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::FileTooLarge {
                size: MAX_FILE_SIZE + 1
            }
        );
    }

    #[test]
    fn enforces_per_session_quota() {
        let store = TempUploadStore::new();
        for i in 0..5 {
            store
                .put("s1", &format!("f{i}"), "application/xml", vec![0; MAX_FILE_SIZE])
                .unwrap();
        }
        let err = store.put("s1", "overflow", "application/xml", vec![1]).unwrap_err();
        assert_eq!(err, UploadError::SessionFull);
        // Quotas are per session.
        store.put("s2", "fresh", "application/xml", vec![1]).unwrap();
    }

    #[test]
    fn remove_frees_quota() {
        let store = TempUploadStore::new();
        let id = store.put("s1", "a", "application/xml", vec![0; MAX_FILE_SIZE]).unwrap();
        store.remove("s1", id).unwrap();
        assert!(matches!(
            store.remove("s1", id),
            Err(UploadError::NotFound)
        ));
        assert!(store.get("s1", id).is_none());
    }

    #[test]
    fn prune_drops_aged_uploads() {
        let store = TempUploadStore::new();
        let id = store.put("s1", "a", "application/xml", vec![1, 2, 3]).unwrap();
        assert_eq!(store.prune_expired(), 0);
        assert_eq!(store.prune_older_than(Duration::ZERO), 1);
        assert!(store.get("s1", id).is_none());
    }
}
