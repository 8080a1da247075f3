//! # Error Types

use thiserror::Error;

/// Error converting a typed value into a storable [`Document`](crate::Document).
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The value serialized to something other than a JSON object.
    #[error("document must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
