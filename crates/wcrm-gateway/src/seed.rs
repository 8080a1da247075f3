//! # Demo Data Seeding
//!
//! Populates an empty store with households, clients and accounts so the
//! UI has something to show. All values are derived from the record's
//! position, so two seeded stores look the same apart from IDs and
//! timestamps.
//!
//! Seeding is skipped when any client exists. The check and the writes run
//! under a process-wide lock; two processes sharing one database can still
//! both seed. A failure midway leaves the records written so far.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use utoipa::ToSchema;
use wcrm_core::entity::{Account, AccountType, Client, Household, KycStatus};
use wcrm_core::{to_document, Collection, DocumentId, Filter};
use wcrm_store::DocumentStore;

use crate::compliance::{ComplianceEntry, ComplianceLogger};
use crate::error::GatewayError;

/// Clients created when the caller names no count.
pub const DEFAULT_SEED_CLIENTS: usize = 20;

const FIRST_NAMES: [&str; 12] = [
    "Olivia", "Liam", "Emma", "Noah", "Ava", "Elijah", "Sophia", "James", "Mia", "Lucas",
    "Harper", "Mateo",
];

const LAST_NAMES: [&str; 10] = [
    "Anderson", "Brooks", "Chen", "Diaz", "Edwards", "Foster", "Garcia", "Hughes", "Iyer",
    "Jensen",
];

const RISK_PROFILES: [&str; 3] = ["Conservative", "Moderate", "Aggressive"];
const CUSTODIANS: [&str; 3] = ["Schwab", "Fidelity", "Pershing"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeedStatus {
    Seeded,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeedOutcome {
    pub status: SeedStatus,
    pub message: String,
    /// Clients created by this call.
    pub created: usize,
}

#[derive(Debug, Clone)]
pub struct DemoSeeder {
    store: Arc<dyn DocumentStore>,
    compliance: ComplianceLogger,
    lock: Arc<Mutex<()>>,
}

impl DemoSeeder {
    pub fn new(store: Arc<dyn DocumentStore>, compliance: ComplianceLogger) -> Self {
        Self {
            store,
            compliance,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Seed `count_clients` clients unless the store already has any.
    pub async fn seed(&self, count_clients: usize) -> Result<SeedOutcome, GatewayError> {
        let _guard = self.lock.lock().await;

        let existing = self
            .store
            .get_documents(Collection::Client.as_str(), &Filter::new(), 1)
            .await?;
        if !existing.is_empty() {
            tracing::info!("demo seed skipped: clients already present");
            return Ok(SeedOutcome {
                status: SeedStatus::Skipped,
                message: "Clients already exist; demo data not seeded".to_string(),
                created: 0,
            });
        }

        let household_count = count_clients.div_ceil(2);
        let mut household_ids = Vec::with_capacity(household_count);
        for h in 0..household_count {
            let id = self.insert(Collection::Household, &demo_household(h)).await?;
            household_ids.push(id);
        }

        let mut account_index = 0;
        for i in 0..count_clients {
            let household_id = household_ids[i / 2].as_str();
            let client_id = self
                .insert(Collection::Client, &demo_client(i, household_id))
                .await?;

            let accounts = if i % 2 == 1 { 2 } else { 1 };
            for _ in 0..accounts {
                let account = demo_account(account_index, client_id.as_str(), household_id);
                self.insert(Collection::Account, &account).await?;
                account_index += 1;
            }
        }

        tracing::info!(
            households = household_count,
            clients = count_clients,
            accounts = account_index,
            "demo data seeded"
        );

        self.compliance
            .log(
                ComplianceEntry::new("seed_demo", Collection::Client.as_str())
                    .labels(["seed", "demo"])
                    .context("households", household_count)
                    .context("clients", count_clients)
                    .context("accounts", account_index),
            )
            .await;

        Ok(SeedOutcome {
            status: SeedStatus::Seeded,
            message: format!(
                "Seeded {household_count} households, {count_clients} clients and {account_index} accounts"
            ),
            created: count_clients,
        })
    }

    async fn insert<T: Serialize>(
        &self,
        collection: Collection,
        record: &T,
    ) -> Result<DocumentId, GatewayError> {
        Ok(self
            .store
            .create_document(collection.as_str(), to_document(record)?)
            .await?)
    }
}

fn demo_household(h: usize) -> Household {
    Household {
        name: format!("{} Household", LAST_NAMES[h % LAST_NAMES.len()]),
        primary_contact_id: None,
        members: Vec::new(),
        risk_profile: Some(RISK_PROFILES[h % RISK_PROFILES.len()].to_string()),
        preferences: Default::default(),
    }
}

/// Clients `2h` and `2h + 1` share household `h` and its surname.
fn demo_client(i: usize, household_id: &str) -> Client {
    let first = FIRST_NAMES[i % FIRST_NAMES.len()];
    let last = LAST_NAMES[(i / 2) % LAST_NAMES.len()];
    Client {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: Some(format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            i
        )),
        phone: Some(format!("555-01{:02}", i % 100)),
        household_id: Some(household_id.to_string()),
        date_of_birth: Some(format!(
            "{}-{:02}-{:02}",
            1950 + (i * 3) % 45,
            1 + i % 12,
            1 + (i * 7) % 28
        )),
        ssn_last4: None,
        address: None,
        kyc_status: if i % 5 == 4 {
            KycStatus::Pending
        } else {
            KycStatus::Approved
        },
    }
}

fn demo_account(j: usize, client_id: &str, household_id: &str) -> Account {
    Account {
        client_id: client_id.to_string(),
        household_id: Some(household_id.to_string()),
        account_type: AccountType::ALL[j % AccountType::ALL.len()],
        custodian: Some(CUSTODIANS[j % CUSTODIANS.len()].to_string()),
        account_number_masked: Some(format!("****{:04}", (j * 37 + 1_000) % 10_000)),
        balance: (25_000 + (j * 7_919) % 475_000) as f64,
        holdings: Vec::new(),
    }
}
