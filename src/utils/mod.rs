//! Utility modules

pub mod fuzzy;

pub use fuzzy::{
    find_best_match, find_matches, find_matches_checked, sequence_ratio, Cutoff, FuzzyMatch,
};
