//! Shared application state for the web server.

use exoscope_analytics::{left_join, JoinedRecord};
use exoscope_common::Result;
use exoscope_config::Config;
use exoscope_data::DatasetStore;
use std::sync::Arc;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    /// Memoized catalog tables, fetched once per locator.
    pub store: DatasetStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = DatasetStore::new(config.datasets.clone());
        Self { config, store }
    }

    /// The combined view: NASA archive rows left-joined with PHL rows.
    /// Both tables come from the cache after the first render.
    pub async fn joined(&self) -> Result<Vec<JoinedRecord>> {
        let exoplanets = self.store.exoplanets().await?;
        let habitability = self.store.habitability().await?;
        Ok(left_join(&exoplanets.records, &habitability.records))
    }
}

pub type SharedState = Arc<AppState>;
