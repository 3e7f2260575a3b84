//! HTTP catalog source
//!
//! - `GET {base}/mock_data` returns the full catalog
//! - `GET {base}/mock_data?q=<query>` returns suggestion candidates
//!
//! Both answer with a JSON array of records.

use reqwest::Client;

use super::errors::{StoreError, StoreResult};
use super::source::{CatalogSource, SourceFuture};
use crate::config::CatalogConfig;
use crate::record::Record;

/// Catalog source backed by the remote HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    /// Builds a client with the configured timeout
    pub fn new(config: &CatalogConfig) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| StoreError::Network(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            url: config.catalog_url(),
        })
    }

    /// Full URL of the catalog resource
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get(&self, query: Option<&str>) -> StoreResult<Vec<Record>> {
        let mut request = self.client.get(&self.url);
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::Network(format!("failed to read catalog response: {e}")))?;

        serde_json::from_slice(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_all(&self) -> SourceFuture<'_> {
        Box::pin(self.get(None))
    }

    fn fetch_matching<'a>(&'a self, query: &'a str) -> SourceFuture<'a> {
        Box::pin(self.get(Some(query)))
    }
}
