//! # Demo Seeding

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use wcrm_gateway::{SeedOutcome, DEFAULT_SEED_CLIENTS};

use crate::error::AppError;
use crate::extractors::{Validate, SEED_CLIENT_RANGE};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeedRequest {
    #[serde(default = "default_count_clients")]
    pub count_clients: usize,
}

fn default_count_clients() -> usize {
    DEFAULT_SEED_CLIENTS
}

impl Default for SeedRequest {
    fn default() -> Self {
        Self {
            count_clients: DEFAULT_SEED_CLIENTS,
        }
    }
}

impl Validate for SeedRequest {
    fn validate(&self) -> Result<(), String> {
        if !SEED_CLIENT_RANGE.contains(&self.count_clients) {
            return Err(format!(
                "count_clients must be between {} and {} (got {})",
                SEED_CLIENT_RANGE.start(),
                SEED_CLIENT_RANGE.end(),
                self.count_clients
            ));
        }
        Ok(())
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/seed/demo", post(seed_demo))
}

/// POST /api/seed/demo: Populate an empty store with demo data.
///
/// An empty body seeds the default number of clients.
#[utoipa::path(
    post,
    path = "/api/seed/demo",
    request_body(content = SeedRequest, description = "Optional; defaults apply when empty"),
    responses(
        (status = 200, description = "Seeded, or skipped because clients exist", body = SeedOutcome),
        (status = 400, description = "Malformed body or store failure", body = crate::error::ErrorBody),
        (status = 422, description = "count_clients out of range", body = crate::error::ErrorBody),
    ),
    tag = "seed"
)]
pub(crate) async fn seed_demo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SeedOutcome>, AppError> {
    let req = parse_seed_request(&body)?;
    Ok(Json(state.seeder.seed(req.count_clients).await?))
}

fn parse_seed_request(body: &[u8]) -> Result<SeedRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SeedRequest::default());
    }
    let req: SeedRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("invalid seed request: {e}")))?;
    req.validate().map_err(AppError::Validation)?;
    Ok(req)
}
