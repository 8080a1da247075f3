//! # Extractors & Validation
//!
//! Typed bodies are checked by serde alone; a body that does not deserialize
//! is a 400. [`Validate`] adds range checks where a field has a hard bound.
//! Generic create payloads are not validated beyond being objects.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::Json;

use crate::error::AppError;

/// Accepted `count_clients` for demo seeding.
pub const SEED_CLIENT_RANGE: std::ops::RangeInclusive<usize> = 1..=500;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
