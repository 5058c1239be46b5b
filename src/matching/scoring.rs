use std::collections::BTreeMap;

use crate::core::components::AddressComponents;
use crate::matching::similarity::{StringSimilarity, TokenSortRatio};
use crate::normalize::expand::{canonicalize_zip, normalize_direction};

/// Per-field weights for the component scorer.
///
/// The defaults sum to 1.0; custom weights are renormalized before use so
/// the composite score stays in `[0, 1]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FieldWeights {
    pub street_number: f64,
    pub street_name: f64,
    pub city: f64,
    pub postal_code: f64,
    pub directional: f64,
    pub suffix: f64,
    pub state: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            street_number: 0.35,
            street_name: 0.25,
            city: 0.15,
            postal_code: 0.10,
            directional: 0.05,
            suffix: 0.05,
            state: 0.05,
        }
    }
}

impl FieldWeights {
    /// Normalize weights to sum to 1.0
    #[must_use]
    pub fn normalized(&self) -> Self {
        let total = self.street_number
            + self.street_name
            + self.city
            + self.postal_code
            + self.directional
            + self.suffix
            + self.state;

        if total <= 0.0 {
            return Self::default();
        }

        Self {
            street_number: self.street_number / total,
            street_name: self.street_name / total,
            city: self.city / total,
            postal_code: self.postal_code / total,
            directional: self.directional / total,
            suffix: self.suffix / total,
            state: self.state / total,
        }
    }
}

/// Weighted comparison of two component sets
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Weighted sum, always in `[0, 1]`
    pub score: f64,

    /// The weights that produced the score
    pub weights: FieldWeights,

    /// Per-field `left|right` trace for diagnostics
    pub comparisons: BTreeMap<String, String>,
}

/// Field-by-field scorer over parsed address components.
///
/// Binary fields (number, suffix, directional, state, postal code) earn
/// their full weight only when both sides are non-empty and equal; street
/// name and city use the injected similarity provider for a continuous
/// score. The provider is swappable without touching anything else.
pub struct ComponentScorer {
    weights: FieldWeights,
    similarity: Box<dyn StringSimilarity>,
}

impl Default for ComponentScorer {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            similarity: Box::new(TokenSortRatio),
        }
    }
}

impl ComponentScorer {
    pub fn new(similarity: Box<dyn StringSimilarity>) -> Self {
        Self {
            weights: FieldWeights::default(),
            similarity,
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: FieldWeights) -> Self {
        self.weights = weights.normalized();
        self
    }

    /// Compare two component sets and produce a weighted score.
    ///
    /// With `require_zip` set, a populated left postal code paired with an
    /// empty right one forces a postal mismatch, penalizing incomplete
    /// catalog records when the caller opts in.
    #[must_use]
    pub fn score(
        &self,
        left: &AddressComponents,
        right: &AddressComponents,
        require_zip: bool,
    ) -> ScoreBreakdown {
        let weights = self.weights.clone();
        let mut comparisons = BTreeMap::new();
        let mut score = 0.0;

        let number_match = binary_match(&left.street_number, &right.street_number);
        trace(&mut comparisons, "street_number", &left.street_number, &right.street_number);
        score += weights.street_number * number_match;

        let direction_left = normalize_direction(&left.street_direction);
        let direction_right = normalize_direction(&right.street_direction);
        let direction_match = binary_match(&direction_left, &direction_right);
        trace(&mut comparisons, "directional", &direction_left, &direction_right);
        score += weights.directional * direction_match;

        let name_similarity = self.field_similarity(&left.street_name, &right.street_name);
        trace(&mut comparisons, "street_name", &left.street_name, &right.street_name);
        score += weights.street_name * name_similarity;

        let suffix_match = binary_match(&left.street_suffix, &right.street_suffix);
        trace(&mut comparisons, "suffix", &left.street_suffix, &right.street_suffix);
        score += weights.suffix * suffix_match;

        let city_similarity = self.field_similarity(&left.city, &right.city);
        trace(&mut comparisons, "city", &left.city, &right.city);
        score += weights.city * city_similarity;

        let state_match = binary_match(&left.state, &right.state);
        trace(&mut comparisons, "state", &left.state, &right.state);
        score += weights.state * state_match;

        let zip_left = canonicalize_zip(&left.postal_code);
        let zip_right = canonicalize_zip(&right.postal_code);
        let mut zip_match = binary_match(&zip_left, &zip_right);
        if require_zip && !zip_left.is_empty() && zip_right.is_empty() {
            zip_match = 0.0;
        }
        trace(&mut comparisons, "postal_code", &zip_left, &zip_right);
        score += weights.postal_code * zip_match;

        ScoreBreakdown {
            score,
            weights,
            comparisons,
        }
    }

    fn field_similarity(&self, left: &str, right: &str) -> f64 {
        if left.is_empty() || right.is_empty() {
            return 0.0;
        }
        self.similarity.similarity(left, right)
    }
}

/// 1.0 when both sides are non-empty and equal, else 0.0
fn binary_match(left: &str, right: &str) -> f64 {
    if !left.is_empty() && left == right {
        1.0
    } else {
        0.0
    }
}

fn trace(comparisons: &mut BTreeMap<String, String>, field: &str, left: &str, right: &str) {
    comparisons.insert(field.to_string(), format!("{left}|{right}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::address::parse_address;

    fn miami() -> AddressComponents {
        parse_address("601 NE 1st Ave, Miami, FL 33132")
    }

    #[test]
    fn test_identical_components_score_one() {
        let scorer = ComponentScorer::default();
        let components = miami();
        let breakdown = scorer.score(&components, &components, false);
        assert!((breakdown.score - 1.0).abs() < 1e-9, "got {}", breakdown.score);
    }

    #[test]
    fn test_score_is_symmetric() {
        let scorer = ComponentScorer::default();
        let left = miami();
        let right = parse_address("621 NE 1st Ave, Miami, FL 33132");
        let forward = scorer.score(&left, &right, false).score;
        let backward = scorer.score(&right, &left, false).score;
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_number_mismatch_drops_its_weight() {
        let scorer = ComponentScorer::default();
        let left = miami();
        let right = parse_address("621 NE 1st Ave, Miami, FL 33132");
        let breakdown = scorer.score(&left, &right, false);
        assert!((breakdown.score - 0.65).abs() < 1e-9, "got {}", breakdown.score);
    }

    #[test]
    fn test_zip4_compares_on_five_digit_form() {
        let scorer = ComponentScorer::default();
        let left = parse_address("123 Main St, Chicago, IL 60601-1234");
        let right = parse_address("123 Main Street, Chicago, IL 60601");
        let breakdown = scorer.score(&left, &right, false);
        assert!((breakdown.score - 1.0).abs() < 1e-9, "got {}", breakdown.score);
        assert_eq!(breakdown.comparisons["postal_code"], "60601|60601");
    }

    #[test]
    fn test_require_zip_penalizes_missing_catalog_zip() {
        let scorer = ComponentScorer::default();
        let left = parse_address("123 Main St, Chicago, IL 60601");
        let right = parse_address("123 Main St, Chicago, IL");

        let lenient = scorer.score(&left, &right, false).score;
        let strict = scorer.score(&left, &right, true).score;
        // Zip weight is lost either way; the flag just makes it explicit
        assert!((lenient - strict).abs() < 1e-9);
        assert!(strict < 1.0);
    }

    #[test]
    fn test_empty_fields_earn_nothing() {
        let scorer = ComponentScorer::default();
        let breakdown = scorer.score(
            &AddressComponents::default(),
            &AddressComponents::default(),
            false,
        );
        assert!(breakdown.score.abs() < 1e-9);
    }

    #[test]
    fn test_directional_renormalized_before_comparison() {
        let scorer = ComponentScorer::default();
        let mut left = miami();
        let mut right = miami();
        left.street_direction = "NORTHEAST".to_string();
        right.street_direction = "NE".to_string();
        let breakdown = scorer.score(&left, &right, false);
        assert!((breakdown.score - 1.0).abs() < 1e-9);
        assert_eq!(breakdown.comparisons["directional"], "NE|NE");
    }

    #[test]
    fn test_custom_weights_are_normalized() {
        let weights = FieldWeights {
            street_number: 7.0,
            street_name: 5.0,
            city: 3.0,
            postal_code: 2.0,
            directional: 1.0,
            suffix: 1.0,
            state: 1.0,
        };
        let scorer = ComponentScorer::default().with_weights(weights);
        let components = miami();
        let breakdown = scorer.score(&components, &components, false);
        assert!((breakdown.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_trace_covers_every_field() {
        let scorer = ComponentScorer::default();
        let breakdown = scorer.score(&miami(), &miami(), false);
        for field in [
            "street_number",
            "street_name",
            "directional",
            "suffix",
            "city",
            "state",
            "postal_code",
        ] {
            assert!(breakdown.comparisons.contains_key(field), "missing {field}");
        }
    }
}
