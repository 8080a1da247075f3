//! # Collection Registry
//!
//! The ten collections the CRM declares a schema for. The generic gateway
//! accepts any collection name (unknown names are simply empty buckets);
//! this enum is the authoritative list advertised to clients.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named bucket of documents sharing a nominal schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Advisor,
    Household,
    Client,
    Account,
    Note,
    Task,
    Communication,
    Document,
    Recommendation,
    Compliance,
}

impl Collection {
    /// All declared collections, in the order advertised by `GET /schema`.
    pub const ALL: [Collection; 10] = [
        Collection::Advisor,
        Collection::Household,
        Collection::Client,
        Collection::Account,
        Collection::Note,
        Collection::Task,
        Collection::Communication,
        Collection::Document,
        Collection::Recommendation,
        Collection::Compliance,
    ];

    /// The storage name of this collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Advisor => "advisor",
            Self::Household => "household",
            Self::Client => "client",
            Self::Account => "account",
            Self::Note => "note",
            Self::Task => "task",
            Self::Communication => "communication",
            Self::Document => "document",
            Self::Recommendation => "recommendation",
            Self::Compliance => "compliance",
        }
    }

    /// Storage names of every declared collection.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Collection::as_str).collect()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_collection_name(s);
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| format!("unknown collection: {s}"))
    }
}

/// Normalize a caller-supplied collection name.
///
/// Collection names are case-insensitive at the API boundary and stored
/// lower-cased. Surrounding whitespace is not trimmed: a name with spaces
/// is a distinct (and probably rejected) collection.
pub fn normalize_collection_name(name: &str) -> String {
    name.to_lowercase()
}
