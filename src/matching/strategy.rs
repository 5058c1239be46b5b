use std::collections::HashMap;
use tracing::trace;

use crate::core::components::AddressComponents;
use crate::core::record::{LocationRecord, ServiceRecord};
use crate::matching::engine::MatchCandidate;
use crate::matching::scoring::ComponentScorer;

/// Minimum raw score a canonical-key hit must reach to be trusted as a
/// perfect match; below it the raw score is reported instead.
pub const CANONICAL_QUALITY_FLOOR: f64 = 0.9;

/// Default minimum confidence for the structured strategy.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.65;

/// A self-contained matching heuristic.
///
/// Strategies are stateless except for configuration: they never mutate the
/// supplied catalog and derive record/location components fresh on every
/// call. The engine re-ranks whatever they return.
pub trait MatchStrategy: Send + Sync {
    /// Short name recorded in candidate and result diagnostics
    fn name(&self) -> &'static str;

    /// Propose candidates for one record against the full catalog
    fn generate(&self, record: &ServiceRecord, locations: &[LocationRecord])
        -> Vec<MatchCandidate>;
}

/// Exact lookup via the canonical component key.
///
/// A canonical hit is trusted but still verified against gross data-quality
/// problems: the full component sets are scored, and only a raw score at or
/// above [`CANONICAL_QUALITY_FLOOR`] earns confidence 1.0.
#[derive(Default)]
pub struct CanonicalStrategy {
    scorer: ComponentScorer,
}

impl CanonicalStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scorer(scorer: ComponentScorer) -> Self {
        Self { scorer }
    }
}

impl MatchStrategy for CanonicalStrategy {
    fn name(&self) -> &'static str {
        "canonical"
    }

    fn generate(
        &self,
        record: &ServiceRecord,
        locations: &[LocationRecord],
    ) -> Vec<MatchCandidate> {
        let record_components = record.resolved_components();
        let Some(canonical_key) = record_components.canonical_key() else {
            return Vec::new();
        };

        // Per-call index; multiple locations may share a key (e.g. units)
        let mut index: HashMap<String, Vec<(usize, AddressComponents)>> = HashMap::new();
        for (idx, location) in locations.iter().enumerate() {
            let components = location.resolved_components();
            if let Some(key) = components.canonical_key() {
                index.entry(key).or_default().push((idx, components));
            }
        }

        let Some(entries) = index.remove(&canonical_key) else {
            trace!(key = %canonical_key, "no canonical key hit");
            return Vec::new();
        };

        entries
            .into_iter()
            .map(|(idx, components)| {
                let breakdown = self.scorer.score(&record_components, &components, false);
                let confidence = if breakdown.score >= CANONICAL_QUALITY_FLOOR {
                    1.0
                } else {
                    breakdown.score
                };
                MatchCandidate::new(locations[idx].clone(), confidence, self.name())
                    .with_reason("canonical_key_match")
                    .with_comparison(breakdown.comparisons)
            })
            .collect()
    }
}

/// Weighted component scoring against every supplied location.
#[derive(Default)]
pub struct StructuredStrategy {
    scorer: ComponentScorer,
    min_confidence: Option<f64>,
    require_zip: bool,
}

impl StructuredStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scorer(scorer: ComponentScorer) -> Self {
        Self {
            scorer,
            min_confidence: None,
            require_zip: false,
        }
    }

    /// Override the minimum confidence threshold (default 0.65)
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = Some(min_confidence);
        self
    }

    /// Penalize catalog records missing a postal code the record has
    #[must_use]
    pub fn with_require_zip(mut self, require_zip: bool) -> Self {
        self.require_zip = require_zip;
        self
    }

    fn threshold(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }
}

impl MatchStrategy for StructuredStrategy {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn generate(
        &self,
        record: &ServiceRecord,
        locations: &[LocationRecord],
    ) -> Vec<MatchCandidate> {
        let record_components = record.resolved_components();
        let threshold = self.threshold();

        let mut candidates: Vec<MatchCandidate> = locations
            .iter()
            .filter_map(|location| {
                let components = location.resolved_components();
                let breakdown =
                    self.scorer
                        .score(&record_components, &components, self.require_zip);
                if breakdown.score < threshold {
                    return None;
                }
                Some(
                    MatchCandidate::new(location.clone(), breakdown.score, self.name())
                        .with_reason("weighted_component_score")
                        .with_comparison(breakdown.comparisons),
                )
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        candidates
    }
}
