//! Fuzzy matching utilities for product lookup
//!
//! Scores candidates with a ratio-of-matches sequence similarity:
//! `2·M / (len(a) + len(b))`, where `M` is the total size of the blocks found
//! by repeatedly taking the longest common substring of the unmatched
//! remainders on both sides.

use crate::core::text_normalizer::normalize;
use crate::error::MatchError;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// Original (un-normalized) candidate
    pub value: String,
    /// Position of `value` in the candidate list
    pub index: usize,
    pub score: f64,
}

/// Minimum similarity a candidate needs to be kept, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cutoff(f64);

impl Cutoff {
    /// Validate a raw threshold. NaN and values outside `[0, 1]` are rejected.
    pub fn new(value: f64) -> Result<Self, MatchError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MatchError::InvalidCutoff(value))
        }
    }

    /// Clamp a raw threshold into `[0, 1]`. NaN becomes `1.0`.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            Self(1.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Longest-matching-blocks similarity between two char sequences.
struct SequenceMatcher<'a> {
    a: &'a [char],
    b: &'a [char],
    b2j: HashMap<char, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    fn new(a: &'a [char], b: &'a [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest common block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i-1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        (best_i, best_j, best_size)
    }

    /// Total size of all matching blocks.
    fn matched_chars(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    fn ratio(&self) -> f64 {
        let len = self.a.len() + self.b.len();
        if len == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / len as f64
    }
}

/// Ratio upper bound from lengths alone; never below the real ratio.
fn ratio_upper_bound(la: usize, lb: usize) -> f64 {
    let len = la + lb;
    if len == 0 {
        return 1.0;
    }
    2.0 * la.min(lb) as f64 / len as f64
}

/// Raw sequence similarity in `[0, 1]`, no normalization applied.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Find matches in a list of candidates
///
/// Returns up to `max_results` candidates scoring at least `cutoff`, best
/// first. Equal scores keep candidate order. Each hit is reported as the
/// first original candidate sharing its normalized form, so two names that
/// normalize identically always resolve to the earlier one.
pub fn find_matches<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    cutoff: Cutoff,
) -> Vec<FuzzyMatch> {
    if max_results == 0 || candidates.is_empty() {
        return Vec::new();
    }

    let query: Vec<char> = normalize(query).chars().collect();
    let normalized: Vec<String> = candidates.iter().map(|c| normalize(c.as_ref())).collect();

    let mut scored: Vec<(usize, f64)> = Vec::new();
    for (idx, candidate) in normalized.iter().enumerate() {
        let candidate: Vec<char> = candidate.chars().collect();
        if ratio_upper_bound(candidate.len(), query.len()) < cutoff.value() {
            continue;
        }
        let score = SequenceMatcher::new(&candidate, &query).ratio();
        if score >= cutoff.value() {
            scored.push((idx, score));
        }
    }

    // Stable: ties keep candidate order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(max_results);

    scored
        .into_iter()
        .map(|(idx, score)| {
            let first = normalized
                .iter()
                .position(|n| *n == normalized[idx])
                .unwrap_or(idx);
            FuzzyMatch {
                value: candidates[first].as_ref().to_string(),
                index: first,
                score,
            }
        })
        .collect()
}

/// Like [`find_matches`], but validates a raw cutoff first.
pub fn find_matches_checked<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    max_results: usize,
    cutoff: f64,
) -> Result<Vec<FuzzyMatch>, MatchError> {
    let cutoff = Cutoff::new(cutoff)?;
    Ok(find_matches(query, candidates, max_results, cutoff))
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    cutoff: Cutoff,
) -> Option<FuzzyMatch> {
    find_matches(query, candidates, 1, cutoff).into_iter().next()
}
