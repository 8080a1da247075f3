//! # Entity Types
//!
//! Typed views of the declared fields of each collection. Cross-references
//! (`household_id`, `client_id`, ...) are informational strings; nothing
//! checks that the referenced document exists.
//!
//! Documents written through the generic gateway are not validated against
//! these types, so a stored document may carry extra fields or lack
//! declared ones. Code that writes documents itself (recommendation
//! generators, compliance logging, demo seeding) goes through these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

// -- People and groupings -------------------------------------------------

/// A licensed advisor or staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Advisor {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    /// CRD/IARD number.
    #[serde(default)]
    pub crd_number: Option<String>,
    #[serde(default)]
    pub teams: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

fn default_role() -> String {
    "advisor".to_string()
}

/// Grouping of related clients for shared planning context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Household {
    pub name: String,
    #[serde(default)]
    pub primary_contact_id: Option<String>,
    /// Client IDs in the household.
    #[serde(default)]
    pub members: Vec<String>,
    /// Conservative | Moderate | Aggressive.
    #[serde(default)]
    pub risk_profile: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub preferences: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Client {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    /// YYYY-MM-DD.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub ssn_last4: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub address: Option<Map<String, Value>>,
    #[serde(default)]
    pub kyc_status: KycStatus,
}

// -- Accounts -------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Taxable,
    Ira,
    RothIra,
    #[serde(rename = "401k")]
    K401,
    #[serde(rename = "529")]
    Plan529,
    Trust,
    Other,
}

impl AccountType {
    pub const ALL: [AccountType; 7] = [
        AccountType::Taxable,
        AccountType::Ira,
        AccountType::RothIra,
        AccountType::K401,
        AccountType::Plan529,
        AccountType::Trust,
        AccountType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taxable => "taxable",
            Self::Ira => "ira",
            Self::RothIra => "roth_ira",
            Self::K401 => "401k",
            Self::Plan529 => "529",
            Self::Trust => "trust",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    /// Owner client ID.
    pub client_id: String,
    #[serde(default)]
    pub household_id: Option<String>,
    pub account_type: AccountType,
    #[serde(default)]
    pub custodian: Option<String>,
    /// Masked number for display.
    #[serde(default)]
    pub account_number_masked: Option<String>,
    #[serde(default)]
    pub balance: f64,
    /// Positions with ticker, weight, cost_basis, etc.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub holdings: Vec<Map<String, Value>>,
}

// -- Activity -------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoteVisibility {
    #[default]
    Internal,
    SharedWithClient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    /// Advisor/staff ID.
    pub author_id: String,
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: NoteVisibility,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
    Blocked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assignee_id: Option<String>,
    #[serde(default)]
    pub related_client_id: Option<String>,
    #[serde(default)]
    pub related_household_id: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationChannel {
    SecureMessage,
    Email,
    Call,
    Meeting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Inbound,
    Outbound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Communication {
    pub channel: CommunicationChannel,
    pub direction: Direction,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub content: String,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub attachments: Vec<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentCategory {
    Statement,
    Tax,
    Estate,
    Ips,
    #[default]
    Other,
}

/// A stored file reference (statement, tax form, IPS, ...).
///
/// Named `DocumentRecord` to keep it apart from the generic
/// [`Document`](crate::Document) mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DocumentRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_client_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    pub storage_url: String,
    #[serde(default)]
    pub category: DocumentCategory,
    #[serde(default)]
    pub shared_with_client: bool,
}

// -- Generated records ----------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Tax,
    Investment,
    Risk,
    Estate,
    Communication,
}

impl RecommendationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tax => "tax",
            Self::Investment => "investment",
            Self::Risk => "risk",
            Self::Estate => "estate",
            Self::Communication => "communication",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    #[default]
    Proposed,
    Approved,
    Implemented,
    Rejected,
}

/// A generated advisory document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub rationale: String,
    /// Expected benefit in `[0, 1]`.
    #[serde(default)]
    pub impact_score: f64,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub household_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub details: Map<String, Value>,
    #[serde(default)]
    pub status: RecommendationStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Low,
    Medium,
    High,
}

/// Append-only audit record of an action, its actor, and the affected resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Compliance {
    /// What happened (`create_document`, `generate_recommendation`, ...).
    pub action: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    /// Collection of the affected resource.
    pub resource_type: String,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub context: Map<String, Value>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}
