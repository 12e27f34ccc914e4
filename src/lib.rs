//! Pharmabot Library
//!
//! Medicine lookup service: Arabic-aware text normalization, fuzzy product
//! matching over a remote catalog, and the chat replies built from it.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod server;
pub mod utils;

pub use catalog::{CatalogProvider, CatalogRow};
pub use core::{LookupOutcome, LookupPolicy, LookupService, QueryReply};
pub use error::{BotError, BotResult, CatalogError, MatchError};
