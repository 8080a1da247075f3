//! # Storage Errors

use thiserror::Error;

/// Failure of the underlying document store.
///
/// Callers above the store never branch on the variant: every storage
/// failure surfaces to API clients as an invalid request carrying this
/// error's message.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store could not be reached.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the operation (e.g. an illegal collection name).
    #[error("document store rejected the operation: {0}")]
    Rejected(String),

    /// A stored document could not be decoded.
    #[error("corrupt document in '{collection}': {reason}")]
    Corrupt {
        collection: String,
        reason: String,
    },

    /// Database driver error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Embedded migrations failed to apply.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}
