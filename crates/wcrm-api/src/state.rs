//! # Application State
//!
//! One store client, shared by every service, plus the request counters.
//! Cloning is cheap; all members are handles.

use std::sync::Arc;

use wcrm_gateway::{ComplianceLogger, CrudGateway, DemoSeeder, RecommendationEngine};
use wcrm_store::{DocumentStore, MemoryStore};

use crate::config::AppConfig;
use crate::middleware::metrics::ApiMetrics;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub gateway: CrudGateway,
    pub engine: RecommendationEngine,
    pub seeder: DemoSeeder,
    pub metrics: ApiMetrics,
    pub config: AppConfig,
}

impl AppState {
    /// Wire every service to `store`.
    pub fn with_store(config: AppConfig, store: Arc<dyn DocumentStore>) -> Self {
        let compliance = ComplianceLogger::new(store.clone());
        Self {
            gateway: CrudGateway::new(store.clone(), compliance.clone()),
            engine: RecommendationEngine::new(store.clone(), compliance.clone()),
            seeder: DemoSeeder::new(store.clone(), compliance),
            metrics: ApiMetrics::new(),
            store,
            config,
        }
    }

    /// In-memory state with default configuration.
    pub fn in_memory() -> Self {
        let config = AppConfig::default();
        let store = MemoryStore::with_database_name(config.database_name.clone());
        Self::with_store(config, Arc::new(store))
    }
}
