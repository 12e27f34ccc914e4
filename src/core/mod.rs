//! Core processing modules
//!
//! Contains text normalization, product lookup and reply formatting.

pub mod lookup;
pub mod reply;
pub mod text_normalizer;

pub use lookup::{is_greeting, resolve, LookupOutcome, LookupPolicy, LookupService};
pub use reply::{render, QueryReply};
pub use text_normalizer::normalize;
