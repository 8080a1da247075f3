//! # OpenAPI Document
//!
//! Served at `/openapi.json`. Entity schemas are included even though the
//! generic create path does not enforce them, so UIs can render forms.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wealth CRM API",
        version = "0.1.0",
        description = "Document-store CRUD for a wealth-management CRM with compliance auto-logging and rule-based advisory endpoints.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::system::root,
        crate::routes::system::schema,
        crate::routes::system::diagnostic,
        crate::routes::system::metrics,
        crate::routes::crud::create_document,
        crate::routes::crud::list_documents,
        crate::routes::ai::portfolio_analysis,
        crate::routes::ai::tax_optimization,
        crate::routes::ai::estate_plan,
        crate::routes::seed::seed_demo,
    ),
    components(schemas(
        // Entities
        wcrm_core::Collection,
        wcrm_core::entity::Advisor,
        wcrm_core::entity::Household,
        wcrm_core::entity::Client,
        wcrm_core::entity::KycStatus,
        wcrm_core::entity::Account,
        wcrm_core::entity::AccountType,
        wcrm_core::entity::Note,
        wcrm_core::entity::NoteVisibility,
        wcrm_core::entity::Task,
        wcrm_core::entity::TaskStatus,
        wcrm_core::entity::TaskPriority,
        wcrm_core::entity::Communication,
        wcrm_core::entity::CommunicationChannel,
        wcrm_core::entity::Direction,
        wcrm_core::entity::DocumentRecord,
        wcrm_core::entity::DocumentCategory,
        wcrm_core::entity::Recommendation,
        wcrm_core::entity::RecommendationCategory,
        wcrm_core::entity::RecommendationStatus,
        wcrm_core::entity::Compliance,
        wcrm_core::entity::Severity,
        // Advisory
        wcrm_core::PortfolioAnalysisRequest,
        wcrm_core::TaxOptimizationRequest,
        wcrm_core::EstatePlanningRequest,
        wcrm_gateway::PortfolioAnalysis,
        wcrm_gateway::PortfolioSummary,
        wcrm_gateway::TargetAllocations,
        wcrm_gateway::TaxOptimization,
        wcrm_gateway::TaxStrategy,
        wcrm_gateway::EstatePlanResult,
        wcrm_gateway::EstatePlan,
        // Seeding
        crate::routes::seed::SeedRequest,
        wcrm_gateway::SeedOutcome,
        wcrm_gateway::SeedStatus,
        // CRUD and system
        crate::routes::crud::CreateRequest,
        crate::routes::crud::CreateResponse,
        crate::routes::crud::ListResponse,
        crate::routes::system::RootResponse,
        crate::routes::system::SchemaResponse,
        crate::routes::system::DiagnosticResponse,
        crate::middleware::metrics::MetricsSnapshot,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    tags(
        (name = "system", description = "Banner, registry and diagnostics"),
        (name = "crud", description = "Generic collection create and list"),
        (name = "ai", description = "Rule-based advisory recommendations"),
        (name = "seed", description = "Demo data"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
