#![allow(dead_code)]

pub mod mock_catalog;

use pharmabot::CatalogRow;

/// Two-row catalog used across the integration tests
pub fn sample_catalog() -> Vec<CatalogRow> {
    vec![
        CatalogRow::new("Panadol", 10.0, 5),
        CatalogRow::new("Panadol Extra", 12.0, 0),
    ]
}
