//! Store doubles for service tests.

use std::collections::HashSet;

use async_trait::async_trait;
use wcrm_core::{Document, DocumentId, Filter};
use wcrm_store::{DocumentStore, MemoryStore, StorageError, StoreDescriptor};

/// A [`MemoryStore`] that refuses writes to selected collections, or every
/// operation when `down`.
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub failing_writes: HashSet<&'static str>,
    pub down: bool,
}

impl FlakyStore {
    pub fn failing_writes_to(collections: &[&'static str]) -> Self {
        Self {
            failing_writes: collections.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn down() -> Self {
        Self {
            down: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.down {
            return Err(StorageError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn create_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<DocumentId, StorageError> {
        self.check()?;
        if self.failing_writes.contains(collection) {
            return Err(StorageError::Unavailable(format!(
                "write to {collection} timed out"
            )));
        }
        self.inner.create_document(collection, data).await
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        self.check()?;
        self.inner.get_documents(collection, filter, limit).await
    }

    async fn list_collections(&self) -> Result<Vec<String>, StorageError> {
        self.check()?;
        self.inner.list_collections().await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.check()
    }

    fn describe(&self) -> StoreDescriptor {
        self.inner.describe()
    }
}
