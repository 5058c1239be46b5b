//! Address parsing.
//!
//! [`address::parse_address`] turns raw address text into
//! [`crate::core::AddressComponents`] through ordered, mutually exclusive
//! extraction passes. Parsing is total: there is no error type here, only
//! empty components for input the passes cannot claim.

pub mod address;

pub use address::parse_address;
