//! # Generic CRUD Gateway
//!
//! Collection-agnostic create and list. Payloads are stored as given; only
//! the collection name is normalized (lower-cased). Each successful create
//! is followed by a best-effort compliance entry.

use std::sync::Arc;

use serde_json::Value;
use wcrm_core::document::non_empty_str;
use wcrm_core::{normalize_collection_name, Document, DocumentId, Filter};
use wcrm_store::DocumentStore;

use crate::compliance::{ComplianceEntry, ComplianceLogger};
use crate::error::GatewayError;

/// Page size used when a list request names no limit.
pub const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Debug, Clone)]
pub struct CrudGateway {
    store: Arc<dyn DocumentStore>,
    compliance: ComplianceLogger,
}

impl CrudGateway {
    pub fn new(store: Arc<dyn DocumentStore>, compliance: ComplianceLogger) -> Self {
        Self { store, compliance }
    }

    /// Store `data` in `collection` and return its new identifier.
    pub async fn create(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<DocumentId, GatewayError> {
        let collection = normalize_collection_name(collection);
        let fields: Vec<Value> = data.keys().cloned().map(Value::String).collect();
        let actor_id = actor_of(&data);

        let id = self.store.create_document(&collection, data).await?;
        tracing::info!(%collection, %id, "document created");

        self.compliance
            .log(
                ComplianceEntry::new("create_document", collection)
                    .resource_id(id.clone())
                    .labels(["auto-log", "create"])
                    .actor(actor_id)
                    .context("fields", fields),
            )
            .await;

        Ok(id)
    }

    /// Up to `limit` documents of `collection`, in store-natural order.
    pub async fn list(
        &self,
        collection: &str,
        limit: usize,
    ) -> Result<Vec<Document>, GatewayError> {
        let collection = normalize_collection_name(collection);
        let items = self
            .store
            .get_documents(&collection, &Filter::new(), limit)
            .await?;
        tracing::debug!(%collection, count = items.len(), "documents listed");
        Ok(items)
    }
}

/// The acting user for an audit entry: `author_id`, else `assignee_id`.
fn actor_of(data: &Document) -> Option<String> {
    non_empty_str(data, "author_id")
        .or_else(|| non_empty_str(data, "assignee_id"))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FlakyStore;
    use serde_json::json;
    use wcrm_store::MemoryStore;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    fn gateway_over(store: Arc<dyn DocumentStore>) -> CrudGateway {
        CrudGateway::new(store.clone(), ComplianceLogger::new(store))
    }

    #[tokio::test]
    async fn created_document_is_listed() {
        let store = MemoryStore::new();
        let gateway = gateway_over(Arc::new(store.clone()));

        let id = gateway
            .create("client", doc(json!({"first_name": "Ada", "last_name": "Byron"})))
            .await
            .unwrap();

        let items = gateway.list("client", DEFAULT_LIST_LIMIT).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["_id"], json!(id.as_str()));
        assert_eq!(items[0]["first_name"], json!("Ada"));
        assert_eq!(items[0]["last_name"], json!("Byron"));
    }

    #[tokio::test]
    async fn collection_name_is_lowercased() {
        let store = MemoryStore::new();
        let gateway = gateway_over(Arc::new(store.clone()));

        gateway
            .create("HouseHold", doc(json!({"name": "Lovelace"})))
            .await
            .unwrap();

        assert_eq!(store.count("household"), 1);
        assert_eq!(gateway.list("HOUSEHOLD", 10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_writes_exactly_one_compliance_entry() {
        let store = MemoryStore::new();
        let gateway = gateway_over(Arc::new(store.clone()));

        let id = gateway
            .create(
                "Note",
                doc(json!({"subject": "Review", "content": "...", "author_id": "adv-7"})),
            )
            .await
            .unwrap();

        let logs = store
            .get_documents("compliance", &Filter::new(), 10)
            .await
            .unwrap();
        assert_eq!(logs.len(), 1);
        let log = &logs[0];
        assert_eq!(log["action"], json!("create_document"));
        assert_eq!(log["resource_type"], json!("note"));
        assert_eq!(log["resource_id"], json!(id.as_str()));
        assert_eq!(log["actor_id"], json!("adv-7"));
        assert_eq!(log["labels"], json!(["auto-log", "create"]));
        assert_eq!(
            log["context"]["fields"],
            json!(["subject", "content", "author_id"])
        );
    }

    #[tokio::test]
    async fn actor_falls_back_to_assignee() {
        let store = MemoryStore::new();
        let gateway = gateway_over(Arc::new(store.clone()));

        gateway
            .create(
                "task",
                doc(json!({"author_id": "", "assignee_id": "adv-2", "title": "Call"})),
            )
            .await
            .unwrap();
        gateway
            .create("task", doc(json!({"title": "Unassigned"})))
            .await
            .unwrap();

        let logs = store
            .get_documents("compliance", &Filter::new(), 10)
            .await
            .unwrap();
        assert_eq!(logs[0]["actor_id"], json!("adv-2"));
        assert_eq!(logs[1]["actor_id"], Value::Null);
    }

    #[tokio::test]
    async fn compliance_failure_does_not_fail_create() {
        let store = Arc::new(FlakyStore::failing_writes_to(&["compliance"]));
        let gateway = gateway_over(store.clone());

        let id = gateway
            .create("account", doc(json!({"client_id": "c1", "balance": 10})))
            .await
            .unwrap();

        assert_eq!(store.inner.count("account"), 1);
        assert_eq!(store.inner.count("compliance"), 0);
        assert!(!id.as_str().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_invalid_request() {
        let gateway = gateway_over(Arc::new(FlakyStore::down()));

        let err = gateway.create("client", Document::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(ref m) if m.contains("connection refused")));

        let err = gateway.list("client", 5).await.unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let store = MemoryStore::new();
        let gateway = gateway_over(Arc::new(store));
        for i in 0..7 {
            gateway
                .create("communication", doc(json!({"n": i})))
                .await
                .unwrap();
        }
        assert_eq!(gateway.list("communication", 3).await.unwrap().len(), 3);
        assert_eq!(gateway.list("communication", 50).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn unknown_collection_lists_empty() {
        let gateway = gateway_over(Arc::new(MemoryStore::new()));
        assert!(gateway
            .list("unknown_collection", DEFAULT_LIST_LIMIT)
            .await
            .unwrap()
            .is_empty());
    }
}
