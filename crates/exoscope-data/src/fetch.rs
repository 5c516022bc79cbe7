//! HTTP client for the public catalog exports.

use exoscope_common::Result;
use tracing::info;

/// Thin wrapper over `reqwest` used by the dataset store.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the raw body of a catalog export.
    /// Non-success statuses surface as errors so the UI can show a notice.
    pub async fn fetch_csv(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        info!(url = %url, bytes = body.len(), "fetched catalog export");
        Ok(body.to_vec())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}
