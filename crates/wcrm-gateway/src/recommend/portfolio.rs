//! Portfolio analysis: sums the balances of the selected accounts and
//! proposes a fixed policy mix.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use utoipa::ToSchema;
use wcrm_core::document::{filter_eq, ID_FIELD};
use wcrm_core::entity::RecommendationCategory;
use wcrm_core::{Collection, Document, DocumentId, PortfolioAnalysisRequest};

use super::{Draft, RecommendationEngine};
use crate::error::GatewayError;

/// Accounts read per household when no explicit account list is given.
pub const HOUSEHOLD_ACCOUNT_LIMIT: usize = 500;

const TITLE: &str = "Rebalance to target policy mix";
const RATIONALE: &str = "Target diversified allocation with emphasis on risk-adjusted returns.";
const IMPACT: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TargetAllocations {
    pub equities: f64,
    pub fixed_income: f64,
    pub cash: f64,
}

impl TargetAllocations {
    pub const POLICY: Self = Self {
        equities: 0.6,
        fixed_income: 0.35,
        cash: 0.05,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioSummary {
    pub total_balance: f64,
    pub target_allocations: TargetAllocations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioAnalysis {
    pub summary: PortfolioSummary,
    pub recommendation_id: DocumentId,
}

impl RecommendationEngine {
    pub async fn portfolio_analysis(
        &self,
        req: &PortfolioAnalysisRequest,
    ) -> Result<PortfolioAnalysis, GatewayError> {
        let accounts = self.accounts_for(req).await?;
        let total_balance = accounts.iter().map(balance_of).fold(0.0, |acc, b| acc + b);
        let target = TargetAllocations::POLICY;

        let mut details = Map::new();
        details.insert("current_total".into(), json!(total_balance));
        details.insert("target_allocations".into(), json!(target));

        let recommendation_id = self
            .persist(Draft {
                category: RecommendationCategory::Investment,
                title: TITLE.to_string(),
                rationale: RATIONALE.to_string(),
                impact_score: IMPACT,
                household_id: req.household_id.clone(),
                details,
                audit_context: Vec::new(),
                label: "portfolio",
            })
            .await?;

        Ok(PortfolioAnalysis {
            summary: PortfolioSummary {
                total_balance,
                target_allocations: target,
            },
            recommendation_id,
        })
    }

    /// Explicit account IDs win over the household; neither means no accounts.
    async fn accounts_for(
        &self,
        req: &PortfolioAnalysisRequest,
    ) -> Result<Vec<Document>, GatewayError> {
        let collection = Collection::Account.as_str();

        if !req.account_ids.is_empty() {
            let mut accounts = Vec::with_capacity(req.account_ids.len());
            for account_id in &req.account_ids {
                let found = self
                    .store
                    .get_documents(collection, &filter_eq(ID_FIELD, account_id.as_str()), 1)
                    .await?;
                accounts.extend(found);
            }
            return Ok(accounts);
        }

        match req.household_id.as_deref() {
            Some(household_id) => Ok(self
                .store
                .get_documents(
                    collection,
                    &filter_eq("household_id", household_id),
                    HOUSEHOLD_ACCOUNT_LIMIT,
                )
                .await?),
            None => Ok(Vec::new()),
        }
    }
}

/// Missing or non-numeric balances count as zero.
fn balance_of(account: &Document) -> f64 {
    account.get("balance").and_then(Value::as_f64).unwrap_or(0.0)
}
