//! # Gateway Errors

use thiserror::Error;
use wcrm_core::DocumentError;
use wcrm_store::StorageError;

/// Failure surfaced to a gateway caller.
///
/// Storage outages and malformed input share one variant. The message
/// carries the underlying cause.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<DocumentError> for GatewayError {
    fn from(err: DocumentError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_message_is_carried() {
        let err = GatewayError::from(StorageError::Unavailable("connection refused".into()));
        assert_eq!(
            err.to_string(),
            "document store unavailable: connection refused"
        );
    }
}
