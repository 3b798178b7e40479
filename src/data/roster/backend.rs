use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

use super::errors::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Players,
    Matches,
}

impl Document {
    pub fn name(&self) -> &'static str {
        match self {
            Document::Players => "players",
            Document::Matches => "matches",
        }
    }
}

/// Raw byte storage for the two bot documents.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// `Ok(None)` when the document was never written.
    async fn read(&self, doc: Document) -> Result<Option<Vec<u8>>, StoreError>;
    async fn write(&self, doc: Document, bytes: &[u8]) -> Result<(), StoreError>;
}

pub struct FileBackend {
    players_path: PathBuf,
    matches_path: PathBuf,
    locks: AsyncMutex<HashMap<PathBuf, Arc<AsyncMutex<()>>>>,
}

impl FileBackend {
    pub fn new(players_path: impl Into<PathBuf>, matches_path: impl Into<PathBuf>) -> Self {
        Self {
            players_path: players_path.into(),
            matches_path: matches_path.into(),
            locks: AsyncMutex::new(HashMap::new()),
        }
    }

    pub fn path_for(&self, doc: Document) -> &Path {
        match doc {
            Document::Players => &self.players_path,
            Document::Matches => &self.matches_path,
        }
    }

    async fn lock_for(&self, path: &Path) -> Arc<AsyncMutex<()>> {
        let mut map = self.locks.lock().await;
        map.entry(path.to_path_buf())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

#[async_trait]
impl DocumentBackend for FileBackend {
    async fn read(&self, doc: Document) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(doc);
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, doc: Document, bytes: &[u8]) -> Result<(), StoreError> {
        let path = self.path_for(doc).to_path_buf();
        let lock = self.lock_for(&path).await;
        let _guard = lock.lock().await;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, bytes).await?;
        match tokio::fs::rename(&tmp_path, &path).await {
            Ok(()) => {}
            Err(_) => {
                tokio::fs::write(&path, bytes).await?;
                let _ = tokio::fs::remove_file(&tmp_path).await;
            }
        }
        debug!(document = doc.name(), path = %path.display(), bytes = bytes.len(), "Wrote document");
        Ok(())
    }
}

/// In-memory backend for tests and dry runs.
#[derive(Default)]
pub struct MemoryBackend {
    docs: Mutex<HashMap<Document, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document with arbitrary bytes, valid JSON or not.
    pub fn with_document(self, doc: Document, bytes: impl Into<Vec<u8>>) -> Self {
        self.docs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(doc, bytes.into());
        self
    }
}

#[async_trait]
impl DocumentBackend for MemoryBackend {
    async fn read(&self, doc: Document) -> Result<Option<Vec<u8>>, StoreError> {
        let docs = self.docs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(docs.get(&doc).cloned())
    }

    async fn write(&self, doc: Document, bytes: &[u8]) -> Result<(), StoreError> {
        let mut docs = self.docs.lock().unwrap_or_else(|e| e.into_inner());
        docs.insert(doc, bytes.to_vec());
        Ok(())
    }
}
