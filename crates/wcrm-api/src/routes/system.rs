//! # Service Endpoints
//!
//! Banner, collection registry, store diagnostics, health probes and
//! request counters.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wcrm_core::Collection;

use crate::middleware::metrics::MetricsSnapshot;
use crate::state::AppState;

/// Collection names returned by the diagnostic, at most.
const DIAGNOSTIC_COLLECTION_LIMIT: usize = 20;
/// Characters of a store error echoed by the diagnostic.
const DIAGNOSTIC_ERROR_CHARS: usize = 80;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SchemaResponse {
    pub collections: Vec<Collection>,
}

/// Store connectivity report. Never an error response; failures are
/// described in `database`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticResponse {
    pub backend: String,
    pub database: String,
    /// `"set"` or `"not set"`; absent unless the store answered.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/schema", get(schema))
        .route("/test", get(diagnostic))
        .route("/metrics", get(metrics))
}

/// Probes answer without touching the request counters.
pub fn health_router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

/// GET /: Service banner.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is up", body = RootResponse)),
    tag = "system"
)]
pub(crate) async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AI Wealth CRM Backend is running".to_string(),
    })
}

/// GET /schema: Names of the known collections.
#[utoipa::path(
    get,
    path = "/schema",
    responses((status = 200, description = "Collection registry", body = SchemaResponse)),
    tag = "system"
)]
pub(crate) async fn schema() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        collections: Collection::ALL.to_vec(),
    })
}

/// GET /test: Store connectivity diagnostic.
#[utoipa::path(
    get,
    path = "/test",
    responses((status = 200, description = "Connectivity report", body = DiagnosticResponse)),
    tag = "system"
)]
pub(crate) async fn diagnostic(State(state): State<AppState>) -> Json<DiagnosticResponse> {
    let descriptor = state.store.describe();
    let mut report = DiagnosticResponse {
        backend: "running".to_string(),
        database: format!("{} store available", descriptor.backend),
        database_url: None,
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    match state.store.list_collections().await {
        Ok(mut names) => {
            names.truncate(DIAGNOSTIC_COLLECTION_LIMIT);
            report.collections = names;
            report.database = "connected".to_string();
            report.connection_status = "Connected".to_string();
            report.database_url = Some(
                if descriptor.url_configured { "set" } else { "not set" }.to_string(),
            );
            report.database_name = Some(descriptor.database_name);
        }
        Err(e) => {
            tracing::warn!(error = %e, "store diagnostic failed");
            let reason: String = e.to_string().chars().take(DIAGNOSTIC_ERROR_CHARS).collect();
            report.database = format!("error: {reason}");
        }
    }

    Json(report)
}

/// GET /metrics: Request counters since startup.
#[utoipa::path(
    get,
    path = "/metrics",
    responses((status = 200, description = "Counters", body = MetricsSnapshot)),
    tag = "system"
)]
pub(crate) async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

async fn liveness() -> &'static str {
    "ok"
}

/// Ready when the store answers a ping.
async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ready"),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
        }
    }
}
