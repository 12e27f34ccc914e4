//! Product catalog
//!
//! Typed catalog rows and the provider seam the lookup service fetches from.
//! Providers are injected; every request fetches a fresh snapshot.

use crate::error::CatalogError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub mod sheety;

/// One product in a catalog snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    /// Product name, the matching key
    pub name: String,
    pub price: f64,
    pub stock: u64,
}

impl CatalogRow {
    pub fn new(name: impl Into<String>, price: f64, stock: u64) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full catalog, in source order
    async fn fetch_catalog(&self) -> Result<Vec<CatalogRow>, CatalogError>;

    /// Provider name for logs
    fn name(&self) -> &str;
}

/// Decode a provider response body: an object holding the rows under `key`.
pub fn parse_catalog(
    body: &Value,
    key: &str,
    name_field: &str,
) -> Result<Vec<CatalogRow>, CatalogError> {
    let rows = body
        .get(key)
        .ok_or_else(|| CatalogError::Decode(format!("missing '{}' array", key)))?
        .as_array()
        .ok_or_else(|| CatalogError::Decode(format!("'{}' is not an array", key)))?;

    parse_rows(rows, name_field)
}

/// Validate untyped records into catalog rows.
///
/// Every row must carry a string name under `name_field`, a numeric `price`
/// and a non-negative integer `stock`. Numeric strings are accepted since
/// spreadsheet cells often arrive as text.
pub fn parse_rows(records: &[Value], name_field: &str) -> Result<Vec<CatalogRow>, CatalogError> {
    records
        .iter()
        .enumerate()
        .map(|(row, record)| parse_row(row, record, name_field))
        .collect()
}

fn parse_row(row: usize, record: &Value, name_field: &str) -> Result<CatalogRow, CatalogError> {
    if !record.is_object() {
        return Err(CatalogError::Decode(format!("row {} is not an object", row)));
    }

    let name = match field(row, record, name_field)? {
        Value::String(s) => s.clone(),
        other => {
            return Err(invalid(
                row,
                name_field,
                format!("expected text, got {}", other),
            ))
        }
    };

    let price = match field(row, record, "price")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite())
    .ok_or_else(|| invalid(row, "price", "expected a number".to_string()))?;

    let stock = match field(row, record, "stock")? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(row, "stock", "expected a non-negative integer".to_string()))?;

    Ok(CatalogRow { name, price, stock })
}

fn field<'a>(row: usize, record: &'a Value, name: &str) -> Result<&'a Value, CatalogError> {
    match record.get(name) {
        Some(Value::Null) | None => Err(CatalogError::MissingField {
            row,
            field: name.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

fn invalid(row: usize, field: &str, reason: String) -> CatalogError {
    CatalogError::InvalidField {
        row,
        field: field.to_string(),
        reason,
    }
}

/// Get the catalog provider based on configuration
pub fn get_provider(
    config: &crate::config::Config,
) -> Result<Arc<dyn CatalogProvider>, CatalogError> {
    Ok(Arc::new(sheety::SheetyProvider::new(config)?))
}
