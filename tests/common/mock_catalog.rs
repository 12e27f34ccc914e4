//! Mock Catalog Provider for Testing
//!
//! Serves a fixed catalog and records how often it was fetched.

use async_trait::async_trait;
use pharmabot::{CatalogError, CatalogProvider, CatalogRow};
use std::sync::{Arc, Mutex};

/// Mock provider that counts fetches
#[derive(Debug, Clone)]
pub struct MockCatalog {
    rows: Vec<CatalogRow>,
    /// Number of fetch_catalog calls
    pub fetches: Arc<Mutex<usize>>,
    /// Simulate failure on fetch
    pub should_fail: Arc<Mutex<bool>>,
}

impl MockCatalog {
    pub fn new(rows: Vec<CatalogRow>) -> Self {
        Self {
            rows,
            fetches: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn failing() -> Self {
        let mock = Self::new(Vec::new());
        *mock.should_fail.lock().unwrap() = true;
        mock
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogRow>, CatalogError> {
        *self.fetches.lock().unwrap() += 1;
        if *self.should_fail.lock().unwrap() {
            return Err(CatalogError::Status {
                status: 503,
                body: "sheet unavailable".to_string(),
            });
        }
        Ok(self.rows.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
