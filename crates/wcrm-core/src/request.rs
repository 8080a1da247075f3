//! # Advisory Request Payloads
//!
//! Bodies accepted by the recommendation endpoints. Unlike generic create
//! payloads these are typed: unknown shapes are rejected at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioAnalysisRequest {
    #[serde(default)]
    pub household_id: Option<String>,
    /// When non-empty, takes precedence over `household_id`.
    #[serde(default)]
    pub account_ids: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub constraints: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaxOptimizationRequest {
    #[serde(default)]
    pub household_id: Option<String>,
    pub year: i32,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub assumptions: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EstatePlanningRequest {
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub facts: Map<String, Value>,
}
