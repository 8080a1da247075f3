//! # Documents
//!
//! A document is a plain JSON object. The store adds `_id`, `created_at`
//! and `updated_at` on insert; everything else is caller data, stored as
//! given.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::DocumentError;

/// Field name under which the store records a document's identifier.
pub const ID_FIELD: &str = "_id";
/// Field name for the store-assigned creation timestamp.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Field name for the store-assigned update timestamp.
pub const UPDATED_AT_FIELD: &str = "updated_at";

/// A mapping of field names to JSON values.
pub type Document = Map<String, Value>;

/// An equality filter: every key must match the document's field.
pub type Filter = Map<String, Value>;

/// Serialize a typed entity into a [`Document`].
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, DocumentError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::NotAnObject(json_type_name(&other))),
    }
}

/// Build a single-key equality filter.
pub fn filter_eq(key: &str, value: impl Into<Value>) -> Filter {
    let mut filter = Filter::new();
    filter.insert(key.to_string(), value.into());
    filter
}

/// Read a string field, treating empty strings as absent.
pub fn non_empty_str<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    doc.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
