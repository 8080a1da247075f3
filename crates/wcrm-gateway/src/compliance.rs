//! # Compliance Logger
//!
//! Writes an audit document to the `compliance` collection after each
//! mutating operation. The write is best-effort: a failure is reported as a
//! `warn` event and otherwise swallowed, so the audit trail may have gaps
//! when the store is degraded.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use wcrm_core::entity::{Compliance, Severity};
use wcrm_core::{to_document, Collection, DocumentId};
use wcrm_store::DocumentStore;

/// An audit event awaiting a timestamp and a write.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceEntry {
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<DocumentId>,
    pub labels: Vec<String>,
    pub actor_id: Option<String>,
    pub context: Map<String, Value>,
}

impl ComplianceEntry {
    pub fn new(action: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id: None,
            labels: Vec::new(),
            actor_id: None,
            context: Map::new(),
        }
    }

    pub fn resource_id(mut self, id: DocumentId) -> Self {
        self.resource_id = Some(id);
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn actor(mut self, actor_id: Option<String>) -> Self {
        self.actor_id = actor_id;
        self
    }

    pub fn context(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.context.insert(key.to_string(), value.into());
        self
    }

    /// Stamp the entry as a [`Compliance`] record with severity `info`.
    fn into_record(self) -> Compliance {
        Compliance {
            action: self.action,
            actor_id: self.actor_id,
            resource_type: self.resource_type,
            resource_id: self.resource_id.map(DocumentId::into_string),
            context: self.context,
            labels: self.labels,
            severity: Severity::Info,
            timestamp: Some(Utc::now()),
        }
    }
}

/// Best-effort writer for compliance documents.
#[derive(Debug, Clone)]
pub struct ComplianceLogger {
    store: Arc<dyn DocumentStore>,
}

impl ComplianceLogger {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Record `entry`. Returns the compliance document ID, or `None` when
    /// the write failed. Never returns an error.
    pub async fn log(&self, entry: ComplianceEntry) -> Option<DocumentId> {
        let action = entry.action.clone();
        let resource_type = entry.resource_type.clone();

        let doc = match to_document(&entry.into_record()) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(%action, %resource_type, error = %e, "compliance entry not serializable; dropped");
                return None;
            }
        };

        match self
            .store
            .create_document(Collection::Compliance.as_str(), doc)
            .await
        {
            Ok(id) => {
                tracing::debug!(%action, %resource_type, compliance_id = %id, "compliance entry recorded");
                Some(id)
            }
            Err(e) => {
                tracing::warn!(%action, %resource_type, error = %e, "compliance entry dropped");
                None
            }
        }
    }
}
