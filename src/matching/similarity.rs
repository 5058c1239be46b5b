//! Pluggable string-similarity providers.

/// Contract for the string-similarity function used by the scorer.
///
/// Implementations must return values in `[0, 1]`, be symmetric, return 1.0
/// for equal non-empty strings and 0.0 when either input is empty. A
/// provider that violates this contract produces undefined confidence
/// values; the scorer does not defend against it.
pub trait StringSimilarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// Baseline character-level ratio: normalized Levenshtein distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceRatio;

impl StringSimilarity for EditDistanceRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        strsim::normalized_levenshtein(a, b)
    }
}

/// Word-order-insensitive ratio: whitespace tokens are sorted and rejoined
/// on both sides before the normalized Levenshtein comparison, so
/// "MARTIN LUTHER KING" and "KING MARTIN LUTHER" compare as equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl StringSimilarity for TokenSortRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        strsim::normalized_levenshtein(&sort_tokens(a), &sort_tokens(b))
    }
}

fn sort_tokens(value: &str) -> String {
    let mut tokens: Vec<&str> = value.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
