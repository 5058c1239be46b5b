use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::debug;

use crate::core::record::{LocationRecord, ServiceRecord};
use crate::core::types::{Confidence, LocationId, RecordId};
use crate::matching::strategy::{CanonicalStrategy, MatchStrategy, StructuredStrategy};

/// Default cap on ranked candidates per result
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("at least one matching strategy is required")]
    NoStrategies,

    #[error("max_candidates must be at least 1")]
    ZeroCandidateCap,
}

/// A proposed pairing of the record with one catalog location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The matched catalog entry
    pub location: LocationRecord,

    /// Match strength in `[0, 1]`; 1.0 only for trusted canonical hits
    pub confidence: f64,

    /// Name of the strategy that produced this candidate
    pub strategy: String,

    /// Free-text reason codes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub diagnostics: BTreeMap<String, String>,

    /// Per-field `left|right` comparison trace
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub comparison: BTreeMap<String, String>,
}

impl MatchCandidate {
    pub fn new(location: LocationRecord, confidence: f64, strategy: impl Into<String>) -> Self {
        Self {
            location,
            confidence,
            strategy: strategy.into(),
            diagnostics: BTreeMap::new(),
            comparison: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.diagnostics.insert("reason".to_string(), reason.into());
        self
    }

    #[must_use]
    pub fn with_comparison(mut self, comparison: BTreeMap<String, String>) -> Self {
        self.comparison = comparison;
        self
    }
}

/// Ranked outcome of matching one record against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// The record this result belongs to
    pub record_id: RecordId,

    /// Candidates in descending confidence order
    pub candidates: Vec<MatchCandidate>,

    /// Result-level diagnostics: selected strategy, formatted confidence
    pub diagnostics: BTreeMap<String, String>,

    // Index of the best candidate, maintained on insertion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    best: Option<usize>,
}

impl MatchResult {
    #[must_use]
    pub fn new(record_id: RecordId) -> Self {
        Self {
            record_id,
            candidates: Vec::new(),
            diagnostics: BTreeMap::new(),
            best: None,
        }
    }

    /// Append a candidate, keeping the best pointer current.
    ///
    /// Ties break toward first insertion: the incumbent wins unless the new
    /// candidate's confidence is strictly greater.
    pub fn push_candidate(&mut self, candidate: MatchCandidate) {
        let replaces = match self.best {
            Some(best) => candidate.confidence > self.candidates[best].confidence,
            None => true,
        };
        if replaces {
            self.best = Some(self.candidates.len());
        }
        self.candidates.push(candidate);
    }

    /// The highest-confidence candidate, if any
    #[must_use]
    pub fn best_candidate(&self) -> Option<&MatchCandidate> {
        self.best.map(|idx| &self.candidates[idx])
    }
}

/// Configuration for the matching engine
pub struct MatchingConfig {
    /// Strategies to run, in order
    pub strategies: Vec<Box<dyn MatchStrategy>>,

    /// Cap on ranked candidates per result
    pub max_candidates: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(CanonicalStrategy::new()),
                Box::new(StructuredStrategy::new()),
            ],
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl std::fmt::Debug for MatchingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingConfig")
            .field(
                "strategies",
                &self
                    .strategies
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>(),
            )
            .field("max_candidates", &self.max_candidates)
            .finish()
    }
}

impl MatchingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::ZeroCandidateCap);
        }
        Ok(())
    }
}

/// The matching engine: runs every configured strategy, deduplicates per
/// location, ranks and truncates.
#[derive(Debug)]
pub struct AddressMatcher {
    config: MatchingConfig,
}

impl Default for AddressMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressMatcher {
    /// Engine with the default strategies (canonical, then structured)
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: MatchingConfig::default(),
        }
    }

    /// Engine with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty strategy list or a zero
    /// candidate cap.
    pub fn with_config(config: MatchingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Match one record against the supplied catalog.
    ///
    /// Total over its inputs: an empty catalog or unparseable record yields
    /// a result with no candidates, never an error. The catalog is read at
    /// most once per strategy and never cached across calls.
    #[must_use]
    pub fn match_record(
        &self,
        record: &ServiceRecord,
        locations: &[LocationRecord],
    ) -> MatchResult {
        let mut result = MatchResult::new(record.id.clone());

        // At most one candidate per location: strictly higher confidence
        // replaces, first-seen wins ties.
        let mut retained: Vec<MatchCandidate> = Vec::new();
        let mut slot_by_location: HashMap<LocationId, usize> = HashMap::new();

        for strategy in &self.config.strategies {
            let candidates = strategy.generate(record, locations);
            debug!(
                strategy = strategy.name(),
                count = candidates.len(),
                record = %record.id,
                "strategy produced candidates"
            );
            for candidate in candidates {
                match slot_by_location.get(&candidate.location.id) {
                    Some(&slot) if candidate.confidence > retained[slot].confidence => {
                        retained[slot] = candidate;
                    }
                    Some(_) => {}
                    None => {
                        slot_by_location.insert(candidate.location.id.clone(), retained.len());
                        retained.push(candidate);
                    }
                }
            }
        }

        // Stable sort keeps first-seen order among equal confidences
        retained.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        retained.truncate(self.config.max_candidates);

        for candidate in retained {
            result.push_candidate(candidate);
        }

        let summary = result
            .best_candidate()
            .map(|best| (best.strategy.clone(), best.confidence));
        match summary {
            Some((strategy, confidence)) => {
                result
                    .diagnostics
                    .insert("selected_strategy".to_string(), strategy);
                result
                    .diagnostics
                    .insert("selected_confidence".to_string(), format!("{confidence:.3}"));
                result.diagnostics.insert(
                    "confidence_band".to_string(),
                    Confidence::from_score(confidence).to_string(),
                );
            }
            None => {
                result
                    .diagnostics
                    .insert("selected_strategy".to_string(), "none".to_string());
                result
                    .diagnostics
                    .insert("selected_confidence".to_string(), "0".to_string());
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<LocationRecord> {
        vec![
            LocationRecord::new("loc-1", "601 NE 1st Ave", "Miami", "FL")
                .with_postal_code("33132"),
            LocationRecord::new("loc-2", "621 NE 1st Ave", "Miami", "FL")
                .with_postal_code("33132"),
        ]
    }

    #[test]
    fn test_one_candidate_per_location() {
        // Both strategies propose loc-1; only the canonical 1.0 survives
        let matcher = AddressMatcher::new();
        let record =
            ServiceRecord::new("row-1").with_raw_address("601 NE 1 AVE, Miami, FL 33132");

        let result = matcher.match_record(&record, &catalog());
        let loc1_count = result
            .candidates
            .iter()
            .filter(|c| c.location.id.0 == "loc-1")
            .count();
        assert_eq!(loc1_count, 1);
        assert_eq!(result.candidates[0].strategy, "canonical");
    }

    #[test]
    fn test_candidates_sorted_and_capped() {
        let locations: Vec<LocationRecord> = (0..10)
            .map(|i| {
                LocationRecord::new(format!("loc-{i}"), "601 NE 1st Ave", "Miami", "FL")
                    .with_postal_code("33132")
            })
            .collect();
        let config = MatchingConfig {
            strategies: vec![Box::new(StructuredStrategy::new())],
            max_candidates: 3,
        };
        let matcher = AddressMatcher::with_config(config).unwrap();
        let record =
            ServiceRecord::new("row-2").with_raw_address("601 NE 1 AVE, Miami, FL 33132");

        let result = matcher.match_record(&record, &locations);
        assert_eq!(result.candidates.len(), 3);
        for pair in result.candidates.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let matcher = AddressMatcher::new();
        let record =
            ServiceRecord::new("row-3").with_raw_address("601 NE 1 AVE, Miami, FL 33132");

        let result = matcher.match_record(&record, &[]);
        assert!(result.candidates.is_empty());
        assert!(result.best_candidate().is_none());
        assert_eq!(
            result.diagnostics.get("selected_strategy").map(String::as_str),
            Some("none")
        );
        assert_eq!(
            result.diagnostics.get("selected_confidence").map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_result_diagnostics_for_best_candidate() {
        let matcher = AddressMatcher::new();
        let record =
            ServiceRecord::new("row-4").with_raw_address("601 NE 1 AVE, Miami, FL 33132");

        let result = matcher.match_record(&record, &catalog());
        assert_eq!(
            result.diagnostics.get("selected_strategy").map(String::as_str),
            Some("canonical")
        );
        assert_eq!(
            result.diagnostics.get("selected_confidence").map(String::as_str),
            Some("1.000")
        );
        assert_eq!(
            result.diagnostics.get("confidence_band").map(String::as_str),
            Some("exact")
        );
    }

    #[test]
    fn test_best_candidate_tie_keeps_incumbent() {
        let mut result = MatchResult::new(RecordId::new("row-5"));
        let first = MatchCandidate::new(
            LocationRecord::new("a", "1 Elm St", "Dallas", "TX"),
            0.8,
            "structured",
        );
        let tied = MatchCandidate::new(
            LocationRecord::new("b", "2 Elm St", "Dallas", "TX"),
            0.8,
            "structured",
        );
        result.push_candidate(first);
        result.push_candidate(tied);

        assert_eq!(result.best_candidate().unwrap().location.id.0, "a");
    }

    #[test]
    fn test_strictly_greater_replaces_best() {
        let mut result = MatchResult::new(RecordId::new("row-6"));
        result.push_candidate(MatchCandidate::new(
            LocationRecord::new("a", "1 Elm St", "Dallas", "TX"),
            0.7,
            "structured",
        ));
        result.push_candidate(MatchCandidate::new(
            LocationRecord::new("b", "2 Elm St", "Dallas", "TX"),
            0.9,
            "structured",
        ));

        assert_eq!(result.best_candidate().unwrap().location.id.0, "b");
    }

    #[test]
    fn test_config_validation() {
        let empty = MatchingConfig {
            strategies: Vec::new(),
            max_candidates: 5,
        };
        assert!(matches!(
            AddressMatcher::with_config(empty),
            Err(ConfigError::NoStrategies)
        ));

        let capless = MatchingConfig {
            strategies: vec![Box::new(StructuredStrategy::new())],
            max_candidates: 0,
        };
        assert!(matches!(
            AddressMatcher::with_config(capless),
            Err(ConfigError::ZeroCandidateCap)
        ));
    }
}
