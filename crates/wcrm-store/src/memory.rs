//! # In-Memory Document Store
//!
//! Process-local adapter used when no database URL is configured, and by
//! tests. Contents do not survive a restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use wcrm_core::{Document, DocumentId, Filter};

use crate::{
    matches_filter, prepare_insert, validate_collection_name, DocumentStore, StorageError,
    StoreDescriptor,
};

/// Thread-safe, cloneable in-memory collection store.
///
/// The lock is `parking_lot` and never held across an `.await`, so every
/// operation completes synchronously inside the async methods. Clones share
/// the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    database_name: String,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_database_name("memory")
    }

    /// Create an empty store reporting `database_name` in diagnostics.
    pub fn with_database_name(database_name: impl Into<String>) -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            database_name: database_name.into(),
        }
    }

    /// Number of documents in `collection`. Test helper; not part of the
    /// [`DocumentStore`] surface.
    #[doc(hidden)]
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<DocumentId, StorageError> {
        let (id, stamped) = prepare_insert(collection, data)?;
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(stamped);
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError> {
        validate_collection_name(collection)?;
        let guard = self.collections.read();
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|doc| matches_filter(doc, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StorageError> {
        let mut names: Vec<String> = self
            .collections
            .read()
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn describe(&self) -> StoreDescriptor {
        StoreDescriptor {
            backend: "memory",
            database_name: self.database_name.clone(),
            url_configured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use wcrm_core::document::filter_eq;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_document() {
        let store = MemoryStore::new();
        let id = store
            .create_document("client", doc(json!({"first_name": "Ada"})))
            .await
            .unwrap();

        let docs = store
            .get_documents("client", &Filter::new(), 50)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("_id"), Some(&json!(id.as_str())));
        assert_eq!(docs[0].get("first_name"), Some(&json!("Ada")));
    }

    #[tokio::test]
    async fn unknown_collection_is_empty() {
        let store = MemoryStore::new();
        let docs = store
            .get_documents("unknown_collection", &Filter::new(), 50)
            .await
            .unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn filter_by_id_finds_one() {
        let store = MemoryStore::new();
        let first = store
            .create_document("account", doc(json!({"balance": 1})))
            .await
            .unwrap();
        store
            .create_document("account", doc(json!({"balance": 2})))
            .await
            .unwrap();

        let docs = store
            .get_documents("account", &filter_eq("_id", first.as_str()), 1)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].get("balance"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn insertion_order_is_preserved() {
        let store = MemoryStore::new();
        for i in 0..5 {
            store
                .create_document("task", doc(json!({"n": i})))
                .await
                .unwrap();
        }
        let docs = store.get_documents("task", &Filter::new(), 3).await.unwrap();
        let ns: Vec<_> = docs.iter().map(|d| d["n"].clone()).collect();
        assert_eq!(ns, vec![json!(0), json!(1), json!(2)]);
    }

    #[tokio::test]
    async fn zero_limit_returns_nothing() {
        let store = MemoryStore::new();
        store
            .create_document("note", doc(json!({})))
            .await
            .unwrap();
        let docs = store.get_documents("note", &Filter::new(), 0).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn illegal_collection_rejected_on_write() {
        let store = MemoryStore::new();
        let err = store
            .create_document("bad$name", doc(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
        assert!(store.list_collections().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_collections_sorted() {
        let store = MemoryStore::new();
        for name in ["task", "advisor", "note"] {
            store
                .create_document(name, doc(json!({})))
                .await
                .unwrap();
        }
        assert_eq!(
            store.list_collections().await.unwrap(),
            vec!["advisor", "note", "task"]
        );
    }

    #[test]
    fn clones_share_data() {
        let store = MemoryStore::new();
        let clone = store.clone();
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(clone.create_document("client", doc(json!({}))))
            .unwrap();
        assert_eq!(store.count("client"), 1);
    }

    proptest! {
        #[test]
        fn never_returns_more_than_limit(inserted in 0usize..40, limit in 0usize..60) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            let store = MemoryStore::new();
            let docs = rt.block_on(async {
                for i in 0..inserted {
                    store
                        .create_document("account", doc(json!({"i": i})))
                        .await
                        .unwrap();
                }
                store
                    .get_documents("account", &Filter::new(), limit)
                    .await
                    .unwrap()
            });
            prop_assert_eq!(docs.len(), inserted.min(limit));
        }
    }
}
