//! # Generic Collection CRUD
//!
//! Create and list for any collection name. Payloads are stored as given.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};
use wcrm_core::{Document, DocumentId};
use wcrm_gateway::DEFAULT_LIST_LIMIT;

use crate::error::AppError;
use crate::extractors::{extract_json, extract_query};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRequest {
    /// Target collection; matched case-insensitively.
    pub collection: String,
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateResponse {
    pub id: DocumentId,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Maximum documents returned (default 50).
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse {
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Document>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/create", post(create_document))
        .route("/api/list/{collection}", get(list_documents))
}

/// POST /api/create: Store a document in any collection.
#[utoipa::path(
    post,
    path = "/api/create",
    request_body = CreateRequest,
    responses(
        (status = 200, description = "Document stored", body = CreateResponse),
        (status = 400, description = "Malformed body or store failure", body = crate::error::ErrorBody),
    ),
    tag = "crud"
)]
pub(crate) async fn create_document(
    State(state): State<AppState>,
    body: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<Json<CreateResponse>, AppError> {
    let req = extract_json(body)?;
    let id = state.gateway.create(&req.collection, req.data).await?;
    Ok(Json(CreateResponse { id }))
}

/// GET /api/list/{collection}: List documents of a collection.
#[utoipa::path(
    get,
    path = "/api/list/{collection}",
    params(
        ("collection" = String, Path, description = "Collection name"),
        ListQuery,
    ),
    responses(
        (status = 200, description = "Documents in natural order", body = ListResponse),
        (status = 400, description = "Bad query or store failure", body = crate::error::ErrorBody),
    ),
    tag = "crud"
)]
pub(crate) async fn list_documents(
    State(state): State<AppState>,
    Path(collection): Path<String>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ListResponse>, AppError> {
    let limit = extract_query(query)?.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let items = state.gateway.list(&collection, limit).await?;
    Ok(Json(ListResponse { items }))
}
