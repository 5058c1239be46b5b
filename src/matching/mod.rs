//! Matching engine, scoring and strategies.
//!
//! This module provides the core matching functionality:
//!
//! - [`AddressMatcher`]: Main entry point for resolving a record
//! - [`ComponentScorer`]: Weighted field-by-field comparison
//! - [`MatchStrategy`]: Contract for self-contained matching heuristics
//! - [`StringSimilarity`]: Pluggable fuzzy-similarity provider
//!
//! ## Matching Algorithm
//!
//! The engine runs its configured strategies in order:
//!
//! 1. **Canonical**: exact lookup via the canonical component key, verified
//!    against gross data-quality problems before earning confidence 1.0
//! 2. **Structured**: weighted component scoring against every catalog
//!    entry, filtered by a minimum-confidence threshold
//!
//! Candidates are then deduplicated per location (highest confidence wins,
//! first-seen breaks ties), ranked by descending confidence and truncated
//! to the configured cap.
//!
//! ## Scoring
//!
//! Field weights default to: street number 0.35, street name 0.25, city
//! 0.15, postal code 0.10, directional 0.05, suffix 0.05, state 0.05.
//! Street name and city use the injected similarity provider; the other
//! fields are binary.

pub mod engine;
pub mod scoring;
pub mod similarity;
pub mod strategy;

pub use engine::{AddressMatcher, ConfigError, MatchCandidate, MatchResult, MatchingConfig};
pub use scoring::{ComponentScorer, FieldWeights, ScoreBreakdown};
pub use similarity::{EditDistanceRatio, StringSimilarity, TokenSortRatio};
pub use strategy::{CanonicalStrategy, MatchStrategy, StructuredStrategy};
