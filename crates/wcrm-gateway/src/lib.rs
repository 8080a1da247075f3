//! # wcrm-gateway: CRM Service Layer
//!
//! Everything between the HTTP surface and the document store.
//!
//! ## Control Flow
//!
//! ```text
//! CrudGateway::create ──► DocumentStore::create_document ──► ComplianceLogger::log
//! CrudGateway::list   ──► DocumentStore::get_documents
//! RecommendationEngine ─► read inputs ─► compute ─► write recommendation ─► ComplianceLogger::log
//! DemoSeeder::seed    ──► guard check ─► households / clients / accounts ─► ComplianceLogger::log
//! ```
//!
//! Compliance logging is a post-commit hook and is lossy by policy: a
//! failed audit write is logged at `warn` and never fails the primary
//! operation.
//!
//! Every service holds an `Arc<dyn DocumentStore>` injected at startup;
//! nothing here keeps entity state between calls.

pub mod compliance;
pub mod error;
pub mod gateway;
pub mod recommend;
pub mod seed;

pub use compliance::{ComplianceEntry, ComplianceLogger};
pub use error::GatewayError;
pub use gateway::{CrudGateway, DEFAULT_LIST_LIMIT};
pub use recommend::{
    EstatePlan, EstatePlanResult, PortfolioAnalysis, PortfolioSummary, RecommendationEngine,
    TargetAllocations, TaxOptimization, TaxStrategy,
};
pub use seed::{DemoSeeder, SeedOutcome, SeedStatus, DEFAULT_SEED_CLIENTS};

#[cfg(test)]
pub(crate) mod test_support;
