//! # addr-resolver
//!
//! A library for resolving free-form postal address strings against a
//! catalog of known locations.
//!
//! Source systems rarely agree on how to write an address: "601 NE 1 AVE",
//! "601 NE 1st Ave" and "601 Northeast First Avenue" all name the same
//! place. `addr-resolver` normalizes such strings into canonical
//! components, then matches an incoming record against the catalog with a
//! layered set of comparison strategies, producing a ranked list of
//! candidates with confidence scores and explainable diagnostics.
//!
//! ## Features
//!
//! - **Text expansion**: abbreviation and ordinal tables give the parser a
//!   uniform vocabulary
//! - **Component parsing**: ordered extraction of number, directional,
//!   street name, suffix, unit, city, state and postal code
//! - **Canonical-key matching**: exact identification via a deterministic
//!   component key
//! - **Weighted scoring**: per-field comparison with a pluggable fuzzy
//!   string-similarity provider
//! - **Explainable results**: per-field comparison traces and reason codes
//!   on every candidate
//!
//! ## Example
//!
//! ```rust
//! use addr_resolver::{AddressMatcher, LocationRecord, ServiceRecord};
//!
//! let locations = vec![
//!     LocationRecord::new("loc-1", "601 NE 1st Ave", "Miami", "FL")
//!         .with_postal_code("33132"),
//!     LocationRecord::new("loc-2", "621 NE 1st Ave", "Miami", "FL")
//!         .with_postal_code("33132"),
//! ];
//! let record = ServiceRecord::new("row-1")
//!     .with_raw_address("601 NE 1 AVE, Miami, FL 33132");
//!
//! let matcher = AddressMatcher::new();
//! let result = matcher.match_record(&record, &locations);
//!
//! let best = result.best_candidate().expect("should match");
//! assert_eq!(best.location.id.0, "loc-1");
//! assert!(best.confidence >= 0.95);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Component, record and result data types
//! - [`normalize`]: Lookup tables and the text expander
//! - [`parsing`]: Address component extraction
//! - [`matching`]: Similarity providers, scorer, strategies and engine
//!
//! The crate performs no I/O: catalog and record construction, along with
//! any ingestion or persistence, belong to the host application.

pub mod core;
pub mod matching;
pub mod normalize;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::components::AddressComponents;
pub use core::record::{LocationRecord, ServiceRecord};
pub use core::types::{Confidence, LocationId, RecordId};
pub use matching::engine::{
    AddressMatcher, ConfigError, MatchCandidate, MatchResult, MatchingConfig,
};
pub use matching::scoring::{ComponentScorer, FieldWeights, ScoreBreakdown};
pub use matching::similarity::{EditDistanceRatio, StringSimilarity, TokenSortRatio};
pub use matching::strategy::{CanonicalStrategy, MatchStrategy, StructuredStrategy};
pub use normalize::expand::expand_address_text;
pub use parsing::address::parse_address;
