//! # Recommendation Generators
//!
//! Three rule-based handlers: portfolio analysis, tax optimization and
//! estate planning. Outputs are fixed; only the portfolio generator looks
//! at stored data (it sums account balances). Each run persists one
//! `recommendation` document with status `proposed` and logs a
//! `generate_recommendation` compliance entry.

pub mod estate;
pub mod portfolio;
pub mod tax;

use std::sync::Arc;

use serde_json::{Map, Value};
use wcrm_core::entity::{Recommendation, RecommendationCategory, RecommendationStatus};
use wcrm_core::{to_document, Collection, DocumentId};
use wcrm_store::DocumentStore;

use crate::compliance::{ComplianceEntry, ComplianceLogger};
use crate::error::GatewayError;

pub use estate::{EstatePlan, EstatePlanResult};
pub use portfolio::{PortfolioAnalysis, PortfolioSummary, TargetAllocations};
pub use tax::{TaxOptimization, TaxStrategy};

#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    store: Arc<dyn DocumentStore>,
    compliance: ComplianceLogger,
}

/// What a generator wants written, before it has an ID.
struct Draft {
    category: RecommendationCategory,
    title: String,
    rationale: String,
    impact_score: f64,
    household_id: Option<String>,
    details: Map<String, Value>,
    /// Extra compliance context beyond `category`.
    audit_context: Vec<(&'static str, Value)>,
    /// Label naming the generator, after `"ai"`.
    label: &'static str,
}

impl RecommendationEngine {
    pub fn new(store: Arc<dyn DocumentStore>, compliance: ComplianceLogger) -> Self {
        Self { store, compliance }
    }

    /// Persist `draft` as a proposed recommendation and audit it.
    async fn persist(&self, draft: Draft) -> Result<DocumentId, GatewayError> {
        let category = draft.category;
        let record = Recommendation {
            category,
            title: draft.title,
            rationale: draft.rationale,
            impact_score: draft.impact_score,
            client_id: None,
            household_id: draft.household_id,
            details: draft.details,
            status: RecommendationStatus::Proposed,
        };

        let id = self
            .store
            .create_document(Collection::Recommendation.as_str(), to_document(&record)?)
            .await?;
        tracing::info!(category = category.as_str(), recommendation_id = %id, "recommendation generated");

        let mut entry = ComplianceEntry::new(
            "generate_recommendation",
            Collection::Recommendation.as_str(),
        )
        .resource_id(id.clone())
        .labels(["ai", draft.label])
        .context("category", category.as_str());
        for (key, value) in draft.audit_context {
            entry = entry.context(key, value);
        }
        self.compliance.log(entry).await;

        Ok(id)
    }
}

#[cfg(test)]
pub(crate) fn engine_over(store: Arc<dyn DocumentStore>) -> RecommendationEngine {
    RecommendationEngine::new(store.clone(), ComplianceLogger::new(store))
}
