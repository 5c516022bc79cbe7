//! Process-wide memoized dataset store.
//!
//! Maps each source locator to its parsed table, populated lazily on first
//! access. A `tokio` mutex per table guards the fetch-once contract:
//! concurrent renders wait for the in-flight fetch and then share the cached
//! snapshot instead of racing duplicate downloads. A failed fetch leaves the
//! cache empty, so the next render retries.

use chrono::{DateTime, Utc};
use exoscope_common::Result;
use exoscope_config::DatasetConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::catalog::{
    decode_exoplanets, decode_habitability, ExoplanetRecord, HabitabilityRecord,
};
use crate::fetch::CatalogClient;

/// One parsed table plus provenance metadata.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot<T> {
    pub source: String,
    pub fetched_at: DateTime<Utc>,
    pub records: Vec<T>,
}

type Cache<T> = Mutex<HashMap<String, Arc<CatalogSnapshot<T>>>>;

/// Lazily populated, read-only store of the two catalog tables.
pub struct DatasetStore {
    client: CatalogClient,
    datasets: DatasetConfig,
    exoplanets: Cache<ExoplanetRecord>,
    habitability: Cache<HabitabilityRecord>,
}

impl DatasetStore {
    pub fn new(datasets: DatasetConfig) -> Self {
        Self::with_client(datasets, CatalogClient::new())
    }

    pub fn with_client(datasets: DatasetConfig, client: CatalogClient) -> Self {
        Self {
            client,
            datasets,
            exoplanets: Mutex::new(HashMap::new()),
            habitability: Mutex::new(HashMap::new()),
        }
    }

    /// The NASA archive table, fetched at most once per locator.
    pub async fn exoplanets(&self) -> Result<Arc<CatalogSnapshot<ExoplanetRecord>>> {
        load_cached(
            &self.client,
            &self.exoplanets,
            &self.datasets.exoplanets_url,
            decode_exoplanets,
        )
        .await
    }

    /// The PHL habitability table, fetched at most once per locator.
    pub async fn habitability(&self) -> Result<Arc<CatalogSnapshot<HabitabilityRecord>>> {
        load_cached(
            &self.client,
            &self.habitability,
            &self.datasets.habitability_url,
            decode_habitability,
        )
        .await
    }

    /// Drop every cached table; the next access refetches.
    pub async fn invalidate(&self) {
        self.exoplanets.lock().await.clear();
        self.habitability.lock().await.clear();
        info!("dataset cache invalidated");
    }
}

async fn load_cached<T>(
    client: &CatalogClient,
    cache: &Cache<T>,
    url: &str,
    decode: fn(&[u8]) -> Result<Vec<T>>,
) -> Result<Arc<CatalogSnapshot<T>>> {
    // The lock is held across the fetch so a second caller for the same
    // locator waits instead of issuing its own request.
    let mut guard = cache.lock().await;
    if let Some(snapshot) = guard.get(url) {
        debug!(url = %url, "dataset cache hit");
        return Ok(Arc::clone(snapshot));
    }

    let body = client.fetch_csv(url).await?;
    let records = decode(&body)?;
    info!(url = %url, rows = records.len(), "loaded catalog");

    let snapshot = Arc::new(CatalogSnapshot {
        source: url.to_string(),
        fetched_at: Utc::now(),
        records,
    });
    guard.insert(url.to_string(), Arc::clone(&snapshot));
    Ok(snapshot)
}
