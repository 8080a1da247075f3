//! Tax optimization heuristics for a household and tax year.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map};
use utoipa::ToSchema;
use wcrm_core::entity::RecommendationCategory;
use wcrm_core::{to_document, DocumentId, TaxOptimizationRequest};

use super::{Draft, RecommendationEngine};
use crate::error::GatewayError;

/// Realized-loss amount worth harvesting against ordinary income, in dollars.
pub const HARVEST_LOSS_THRESHOLD: u32 = 3_000;

const RATIONALE: &str = "Based on standard tax-efficient investing heuristics.";
const IMPACT: f64 = 0.65;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaxStrategy {
    pub harvest_loss_threshold: u32,
    pub asset_location: String,
    pub roth_conversion: String,
}

impl TaxStrategy {
    pub fn standard() -> Self {
        Self {
            harvest_loss_threshold: HARVEST_LOSS_THRESHOLD,
            asset_location: "place bonds in tax-advantaged accounts".to_string(),
            roth_conversion: "consider partial conversions if current bracket < future"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaxOptimization {
    pub recommendation_id: DocumentId,
    pub strategy: TaxStrategy,
}

impl RecommendationEngine {
    pub async fn tax_optimization(
        &self,
        req: &TaxOptimizationRequest,
    ) -> Result<TaxOptimization, GatewayError> {
        let strategy = TaxStrategy::standard();
        let details: Map<_, _> = to_document(&strategy)?;

        let recommendation_id = self
            .persist(Draft {
                category: RecommendationCategory::Tax,
                title: format!("Tax optimization opportunities for {}", req.year),
                rationale: RATIONALE.to_string(),
                impact_score: IMPACT,
                household_id: req.household_id.clone(),
                details,
                audit_context: vec![("year", json!(req.year))],
                label: "tax",
            })
            .await?;

        Ok(TaxOptimization {
            recommendation_id,
            strategy,
        })
    }
}
