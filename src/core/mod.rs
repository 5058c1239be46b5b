//! Core data types for address resolution.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`AddressComponents`]: Normalized components parsed from an address string
//! - [`LocationRecord`]: A catalog entry the engine can match against
//! - [`ServiceRecord`]: An incoming record that needs resolution
//! - [`LocationId`], [`RecordId`], [`Confidence`]: Identifier and result types
//!
//! ## Canonical Keys
//!
//! Two addresses match exactly when their canonical keys are equal. The key
//! is the pipe-joined concatenation of number, directional, name, suffix,
//! city, state and postal code. The unit is deliberately excluded, so two
//! units at the same street address share a key.

pub mod components;
pub mod record;
pub mod types;

pub use components::AddressComponents;
pub use record::{LocationRecord, ServiceRecord};
pub use types::{Confidence, LocationId, RecordId};
