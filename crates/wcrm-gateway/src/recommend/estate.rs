//! Estate planning review. Goals and facts are accepted but do not yet
//! change the checklist.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use wcrm_core::entity::RecommendationCategory;
use wcrm_core::{to_document, DocumentId, EstatePlanningRequest};

use super::{Draft, RecommendationEngine};
use crate::error::GatewayError;

const TITLE: &str = "Estate planning review";
const RATIONALE: &str = "Standard best-practice checks based on provided facts.";
const IMPACT: f64 = 0.58;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstatePlan {
    pub will_status: String,
    pub trust_recommendation: String,
    pub beneficiary_review: String,
}

impl EstatePlan {
    pub fn standard() -> Self {
        Self {
            will_status: "review_needed".to_string(),
            trust_recommendation: "consider revocable living trust".to_string(),
            beneficiary_review: "ensure beneficiary designations align with goals".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstatePlanResult {
    pub recommendation_id: DocumentId,
    pub plan: EstatePlan,
}

impl RecommendationEngine {
    pub async fn estate_plan(
        &self,
        req: &EstatePlanningRequest,
    ) -> Result<EstatePlanResult, GatewayError> {
        let plan = EstatePlan::standard();

        let recommendation_id = self
            .persist(Draft {
                category: RecommendationCategory::Estate,
                title: TITLE.to_string(),
                rationale: RATIONALE.to_string(),
                impact_score: IMPACT,
                household_id: req.household_id.clone(),
                details: to_document(&plan)?,
                audit_context: Vec::new(),
                label: "estate",
            })
            .await?;

        Ok(EstatePlanResult {
            recommendation_id,
            plan,
        })
    }
}
