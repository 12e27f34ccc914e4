//! Text Normalization
//!
//! Folds Arabic letter variants and case so product names compare
//! robustly regardless of how the customer spelled them.

/// Arabic letter variants and their canonical form, applied in order.
const ARABIC_FOLDS: [(char, char); 7] = [
    ('أ', 'ا'),
    ('إ', 'ا'),
    ('آ', 'ا'),
    ('ة', 'ه'),
    ('ى', 'ي'),
    ('ؤ', 'و'),
    ('ئ', 'ي'),
];

/// Normalize text for matching.
///
/// 1. Replace every Arabic letter variant from the fold table.
/// 2. Lowercase (no-op for Arabic script).
/// 3. Trim leading/trailing whitespace; inner whitespace is kept.
///
/// Pure and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut result = text.to_string();

    for (from, to) in ARABIC_FOLDS {
        if result.contains(from) {
            result = result.replace(from, to.encode_utf8(&mut [0; 4]));
        }
    }

    result.to_lowercase().trim().to_string()
}
