//! Sheety catalog provider
//!
//! Reads the product sheet through the spreadsheet's REST endpoint.

use super::{parse_catalog, CatalogProvider, CatalogRow};
use crate::error::CatalogError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches the catalog over HTTP on every call
#[derive(Clone)]
pub struct SheetyProvider {
    client: reqwest::Client,
    url: String,
    key: String,
    name_field: String,
}

impl SheetyProvider {
    /// Create new provider from config
    pub fn new(config: &crate::config::Config) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.catalog_url.clone(),
            key: config.catalog_key.clone(),
            name_field: config.name_field.clone(),
        })
    }
}

#[async_trait]
impl CatalogProvider for SheetyProvider {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogRow>, CatalogError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("❌ Sheety API Error ({}): {}", status, body_text);
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let body: serde_json::Value = serde_json::from_str(&body_text)
            .map_err(|e| CatalogError::Decode(format!("invalid JSON: {}", e)))?;

        let rows = parse_catalog(&body, &self.key, &self.name_field)?;
        debug!("📦 Fetched {} catalog rows", rows.len());
        Ok(rows)
    }

    fn name(&self) -> &str {
        "sheety"
    }
}
