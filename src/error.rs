//! Pharmabot Error Types
//!
//! Centralized error handling for the lookup service and its boundary.

use thiserror::Error;

/// Central error type for Pharmabot
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),
}

/// Result type alias for Pharmabot operations
pub type BotResult<T> = Result<T, BotError>;

/// Failure to obtain a usable catalog from the provider
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("row {row}: missing field '{field}'")]
    MissingField { row: usize, field: String },

    #[error("row {row}: invalid field '{field}': {reason}")]
    InvalidField {
        row: usize,
        field: String,
        reason: String,
    },
}

/// Caller contract violations for the matcher
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("cutoff must be within [0, 1], got {0}")]
    InvalidCutoff(f64),
}
