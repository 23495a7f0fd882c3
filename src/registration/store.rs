//! The document-store capability the registration flow writes through.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A document as written to the store: a JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Identifier assigned by the store to a created document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure reported by a [`DocumentStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The store could not be reached (network down, timeout).
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write (permissions, schema rules).
    #[error("document store rejected the write: {0}")]
    Rejected(String),
}

/// Write access to a hosted document database.
///
/// Only creation is needed: the registration flow performs exactly one
/// write, at confirmation. Implementations are passed in explicitly; the
/// crate keeps no global client.
pub trait DocumentStore {
    /// Create a new document in `collection` and return its id.
    fn create(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<DocumentId, StoreError>> + Send;
}

/// In-process [`DocumentStore`] keeping documents in memory.
///
/// Ids are sequential and zero-padded (`doc-000001`, `doc-000002`, …).
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    next_id: u64,
    collections: BTreeMap<String, BTreeMap<DocumentId, Document>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored document by collection and id.
    pub fn get(&self, collection: &str, id: &DocumentId) -> Option<Document> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.collections.get(collection)?.get(id).cloned()
    }

    /// Number of documents in a collection.
    pub fn count(&self, collection: &str) -> usize {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.collections.get(collection).map_or(0, BTreeMap::len)
    }

    fn insert(&self, collection: &str, document: Document) -> Result<DocumentId, StoreError> {
        if collection.is_empty() {
            return Err(StoreError::Rejected("collection path is empty".into()));
        }
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.next_id += 1;
        let id = DocumentId(format!("doc-{:0>6}", inner.next_id));
        inner
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);
        Ok(id)
    }
}

impl DocumentStore for MemoryStore {
    fn create(
        &self,
        collection: &str,
        document: Document,
    ) -> impl Future<Output = Result<DocumentId, StoreError>> + Send {
        let result = self.insert(collection, document);
        async move { result }
    }
}
