//! # Advisory Endpoints
//!
//! Rule-based portfolio, tax and estate recommendations. Each call persists
//! a proposed recommendation and returns its ID with the computed payload.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use wcrm_core::{EstatePlanningRequest, PortfolioAnalysisRequest, TaxOptimizationRequest};
use wcrm_gateway::{EstatePlanResult, PortfolioAnalysis, TaxOptimization};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ai/portfolio/analysis", post(portfolio_analysis))
        .route("/api/ai/tax/optimization", post(tax_optimization))
        .route("/api/ai/estate/plan", post(estate_plan))
}

/// POST /api/ai/portfolio/analysis: Sum balances and propose a target mix.
#[utoipa::path(
    post,
    path = "/api/ai/portfolio/analysis",
    request_body = PortfolioAnalysisRequest,
    responses(
        (status = 200, description = "Analysis and recommendation ID", body = PortfolioAnalysis),
        (status = 400, description = "Malformed body or store failure", body = crate::error::ErrorBody),
    ),
    tag = "ai"
)]
pub(crate) async fn portfolio_analysis(
    State(state): State<AppState>,
    body: Result<Json<PortfolioAnalysisRequest>, JsonRejection>,
) -> Result<Json<PortfolioAnalysis>, AppError> {
    let req = extract_json(body)?;
    Ok(Json(state.engine.portfolio_analysis(&req).await?))
}

/// POST /api/ai/tax/optimization: Standard tax-efficiency strategy.
#[utoipa::path(
    post,
    path = "/api/ai/tax/optimization",
    request_body = TaxOptimizationRequest,
    responses(
        (status = 200, description = "Strategy and recommendation ID", body = TaxOptimization),
        (status = 400, description = "Malformed body or store failure", body = crate::error::ErrorBody),
    ),
    tag = "ai"
)]
pub(crate) async fn tax_optimization(
    State(state): State<AppState>,
    body: Result<Json<TaxOptimizationRequest>, JsonRejection>,
) -> Result<Json<TaxOptimization>, AppError> {
    let req = extract_json(body)?;
    Ok(Json(state.engine.tax_optimization(&req).await?))
}

/// POST /api/ai/estate/plan: Estate planning checklist.
#[utoipa::path(
    post,
    path = "/api/ai/estate/plan",
    request_body = EstatePlanningRequest,
    responses(
        (status = 200, description = "Plan and recommendation ID", body = EstatePlanResult),
        (status = 400, description = "Malformed body or store failure", body = crate::error::ErrorBody),
    ),
    tag = "ai"
)]
pub(crate) async fn estate_plan(
    State(state): State<AppState>,
    body: Result<Json<EstatePlanningRequest>, JsonRejection>,
) -> Result<Json<EstatePlanResult>, AppError> {
    let req = extract_json(body)?;
    Ok(Json(state.engine.estate_plan(&req).await?))
}
