//! # wcrm-store: Document Store Adapters
//!
//! The store is addressed by collection name and accepts/returns plain
//! JSON mappings. Identifiers are opaque strings assigned on insert.
//!
//! ## Adapters
//!
//! | Adapter              | Backing              | Natural order   |
//! |----------------------|----------------------|-----------------|
//! | [`MemoryStore`]      | process-local map    | insertion order |
//! | [`PgDocumentStore`]  | PostgreSQL (`JSONB`) | insertion order |
//!
//! Both share the insert preparation in this module: collection names are
//! validated and `_id`, `created_at`, `updated_at` are stamped onto the
//! document before it is written.
//!
//! ## Query Semantics
//!
//! `get_documents` applies an equality filter per key. A `null` filter
//! value matches a missing or null field. Numbers compare by value, as
//! `jsonb` does, so `1` matches `1.0`. Unknown collections are empty, not
//! errors. A `limit` of zero returns nothing.

pub mod error;
pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use wcrm_core::document::{CREATED_AT_FIELD, ID_FIELD, UPDATED_AT_FIELD};
use wcrm_core::{Document, DocumentId, Filter};

pub use error::StorageError;
pub use memory::MemoryStore;
pub use postgres::{PgDocumentStore, PgStoreOptions};

/// Longest accepted collection name, in bytes.
pub const MAX_COLLECTION_NAME_LEN: usize = 120;

/// Static facts about a store, reported by connectivity diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreDescriptor {
    /// Adapter name, e.g. `"memory"` or `"postgres"`.
    pub backend: &'static str,
    /// Logical database name.
    pub database_name: String,
    /// Whether a connection URL was supplied.
    pub url_configured: bool,
}

/// Collection-addressed document storage.
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// across request tasks behind an `Arc`. The trait is object-safe so the
/// adapter can be chosen at startup.
#[async_trait]
pub trait DocumentStore: Send + Sync + fmt::Debug {
    /// Insert `data` into `collection` and return the generated identifier.
    async fn create_document(
        &self,
        collection: &str,
        data: Document,
    ) -> Result<DocumentId, StorageError>;

    /// Return up to `limit` documents of `collection` matching `filter`.
    async fn get_documents(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> Result<Vec<Document>, StorageError>;

    /// Names of collections holding at least one document, sorted.
    async fn list_collections(&self) -> Result<Vec<String>, StorageError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), StorageError>;

    fn describe(&self) -> StoreDescriptor;

    /// Release connections. Further calls fail with [`StorageError`].
    async fn close(&self) {}
}

/// Check a collection name against the store's naming rules.
pub fn validate_collection_name(name: &str) -> Result<(), StorageError> {
    if name.is_empty() {
        return Err(StorageError::Rejected(
            "collection name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_COLLECTION_NAME_LEN {
        return Err(StorageError::Rejected(format!(
            "collection name must not exceed {MAX_COLLECTION_NAME_LEN} bytes"
        )));
    }
    if name.contains('$') || name.contains('\0') {
        return Err(StorageError::Rejected(format!(
            "collection name '{}' contains an illegal character",
            name.escape_default()
        )));
    }
    Ok(())
}

/// Validate the collection and stamp store-managed fields onto `data`.
///
/// Caller-supplied `_id`, `created_at` and `updated_at` are overwritten.
pub fn prepare_insert(
    collection: &str,
    mut data: Document,
) -> Result<(DocumentId, Document), StorageError> {
    validate_collection_name(collection)?;
    let id = DocumentId::generate();
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    data.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    data.insert(CREATED_AT_FIELD.to_string(), Value::String(now.clone()));
    data.insert(UPDATED_AT_FIELD.to_string(), Value::String(now));
    Ok((id, data))
}

/// Whether `doc` satisfies every equality constraint in `filter`.
pub fn matches_filter(doc: &Document, filter: &Filter) -> bool {
    filter.iter().all(|(key, expected)| match doc.get(key) {
        Some(actual) if expected.is_null() => actual.is_null(),
        Some(actual) => json_eq(actual, expected),
        None => expected.is_null(),
    })
}

/// Structural equality with numbers compared by value.
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            match (x.as_i64(), y.as_i64(), x.as_u64(), y.as_u64()) {
                (Some(x), Some(y), _, _) => x == y,
                (_, _, Some(x), Some(y)) => x == y,
                _ => x.as_f64() == y.as_f64(),
            }
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(k, a)| y.get(k).is_some_and(|b| json_eq(a, b)))
        }
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn empty_collection_name_rejected() {
        assert!(matches!(
            validate_collection_name(""),
            Err(StorageError::Rejected(_))
        ));
    }

    #[test]
    fn dollar_and_nul_rejected() {
        assert!(validate_collection_name("cli$ent").is_err());
        assert!(validate_collection_name("cli\0ent").is_err());
        assert!(validate_collection_name("client").is_ok());
        assert!(validate_collection_name("unknown_collection").is_ok());
    }

    #[test]
    fn overlong_collection_name_rejected() {
        let name = "a".repeat(MAX_COLLECTION_NAME_LEN + 1);
        assert!(validate_collection_name(&name).is_err());
        let name = "a".repeat(MAX_COLLECTION_NAME_LEN);
        assert!(validate_collection_name(&name).is_ok());
    }

    #[test]
    fn prepare_insert_stamps_managed_fields() {
        let (id, stamped) =
            prepare_insert("note", doc(json!({"_id": "spoofed", "subject": "hi"}))).unwrap();
        assert_eq!(stamped.get("_id"), Some(&json!(id.as_str())));
        assert_ne!(id.as_str(), "spoofed");
        assert_eq!(stamped.get("subject"), Some(&json!("hi")));
        assert!(stamped.get("created_at").is_some_and(Value::is_string));
        assert_eq!(stamped.get("created_at"), stamped.get("updated_at"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_filter(&doc(json!({"a": 1})), &Filter::new()));
    }

    #[test]
    fn filter_requires_every_key() {
        let d = doc(json!({"household_id": "h1", "balance": 100}));
        assert!(matches_filter(&d, &doc(json!({"household_id": "h1"}))));
        assert!(matches_filter(
            &d,
            &doc(json!({"household_id": "h1", "balance": 100}))
        ));
        assert!(!matches_filter(
            &d,
            &doc(json!({"household_id": "h1", "balance": 200}))
        ));
        assert!(!matches_filter(&d, &doc(json!({"client_id": "c1"}))));
    }

    #[test]
    fn numbers_match_by_value() {
        let d = doc(json!({"balance": 1, "mix": {"cash": 0.5, "lots": [2, 3.0]}}));
        assert!(matches_filter(&d, &doc(json!({"balance": 1.0}))));
        assert!(matches_filter(
            &d,
            &doc(json!({"mix": {"lots": [2.0, 3], "cash": 0.5}}))
        ));
        assert!(!matches_filter(&d, &doc(json!({"balance": 1.5}))));
        assert!(!matches_filter(&d, &doc(json!({"balance": "1"}))));
    }

    #[test]
    fn null_filter_matches_missing_or_null() {
        let filter = doc(json!({"household_id": null}));
        assert!(matches_filter(&doc(json!({"a": 1})), &filter));
        assert!(matches_filter(&doc(json!({"household_id": null})), &filter));
        assert!(!matches_filter(&doc(json!({"household_id": "h1"})), &filter));
    }
}
