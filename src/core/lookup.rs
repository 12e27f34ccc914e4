//! Product lookup
//!
//! Turns a free-text customer message into a lookup outcome: a greeting,
//! an exact product hit, a short list of alternatives, or nothing.

use crate::catalog::{CatalogProvider, CatalogRow};
use crate::config::Config;
use crate::core::reply::{self, QueryReply};
use crate::error::{BotError, BotResult, CatalogError};
use crate::utils::fuzzy::{find_best_match, find_matches, Cutoff};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Phrases answered with a welcome, compared after trim + lowercase only
pub const GREETINGS: [&str; 5] = ["اهلا", "مرحبا", "السلام عليكم", "hi", "hello"];

/// Check a raw message against the greeting set (exact, never fuzzy)
pub fn is_greeting(raw: &str) -> bool {
    let message = raw.trim().to_lowercase();
    GREETINGS.contains(&message.as_str())
}

/// Thresholds for the two matching passes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookupPolicy {
    /// Single best candidate must reach this to count as the product asked for
    pub exact_cutoff: Cutoff,
    pub alternatives_cutoff: Cutoff,
    pub max_alternatives: usize,
}

impl Default for LookupPolicy {
    fn default() -> Self {
        Self {
            exact_cutoff: Cutoff::clamped(0.4),
            alternatives_cutoff: Cutoff::clamped(0.2),
            max_alternatives: 3,
        }
    }
}

impl LookupPolicy {
    /// Build from config, rejecting out-of-range thresholds up front
    pub fn from_config(config: &Config) -> BotResult<Self> {
        if config.max_alternatives == 0 {
            return Err(BotError::Config(
                "max_alternatives must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            exact_cutoff: Cutoff::new(config.exact_cutoff)?,
            alternatives_cutoff: Cutoff::new(config.alternatives_cutoff)?,
            max_alternatives: config.max_alternatives,
        })
    }
}

/// What a customer message resolved to
#[derive(Debug)]
pub enum LookupOutcome {
    Greeting,
    /// Stock is not considered here; an empty shelf is still a hit
    ExactHit { row: CatalogRow },
    /// Closest products, best first
    Alternatives { rows: Vec<CatalogRow> },
    NoMatch,
    /// Catalog could not be fetched; distinct from `NoMatch`
    FetchError { cause: CatalogError },
}

/// Match a query against an already fetched catalog.
///
/// Runs the strict single-hit pass first and falls back to the relaxed
/// alternatives pass. Greetings are not checked here.
pub fn resolve(query: &str, catalog: &[CatalogRow], policy: &LookupPolicy) -> LookupOutcome {
    let names: Vec<&str> = catalog.iter().map(|row| row.name.as_str()).collect();

    if let Some(hit) = find_best_match(query, &names, policy.exact_cutoff) {
        if let Some(row) = row_named(catalog, &hit.value) {
            info!("🎯 Exact hit: '{}' (score {:.2})", row.name, hit.score);
            return LookupOutcome::ExactHit { row: row.clone() };
        }
    }

    let rows: Vec<CatalogRow> = find_matches(
        query,
        &names,
        policy.max_alternatives,
        policy.alternatives_cutoff,
    )
    .into_iter()
    .filter_map(|m| row_named(catalog, &m.value).cloned())
    .collect();

    if rows.is_empty() {
        debug!("No product matched for: '{}'", query);
        LookupOutcome::NoMatch
    } else {
        info!("🔄 {} alternatives for '{}'", rows.len(), query);
        LookupOutcome::Alternatives { rows }
    }
}

/// First row carrying exactly this name
fn row_named<'a>(catalog: &'a [CatalogRow], name: &str) -> Option<&'a CatalogRow> {
    catalog.iter().find(|row| row.name == name)
}

/// Answers customer messages against a freshly fetched catalog
#[derive(Clone)]
pub struct LookupService {
    provider: Arc<dyn CatalogProvider>,
    policy: LookupPolicy,
}

impl LookupService {
    pub fn new(provider: Arc<dyn CatalogProvider>, policy: LookupPolicy) -> Self {
        Self { provider, policy }
    }

    /// Greeting check, then fetch, then the two matching passes.
    ///
    /// Callers must reject empty messages before getting here.
    pub async fn lookup(&self, query: &str) -> LookupOutcome {
        if is_greeting(query) {
            debug!("👋 Greeting: '{}'", query.trim());
            return LookupOutcome::Greeting;
        }

        let catalog = match self.provider.fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(cause) => {
                warn!("❌ Catalog fetch from {} failed: {}", self.provider.name(), cause);
                return LookupOutcome::FetchError { cause };
            }
        };
        debug!("📦 Searching {} products for '{}'", catalog.len(), query);

        resolve(query, &catalog, &self.policy)
    }

    /// Look up a message and render the reply for the boundary layer
    pub async fn handle_query(&self, message: &str) -> QueryReply {
        reply::render(&self.lookup(message).await)
    }

    /// Current catalog snapshot, unmatched
    pub async fn products(&self) -> Result<Vec<CatalogRow>, CatalogError> {
        self.provider.fetch_catalog().await
    }
}
