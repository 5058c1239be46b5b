//! Normalization tables and the text expander.
//!
//! The lookup tables in [`tables`] define the US address vocabulary the
//! parser understands; [`expand`] rewrites raw text into that vocabulary
//! before tokenization. Everything here is deterministic and total;
//! unmatched input passes through unchanged.

pub mod expand;
pub mod tables;

pub use expand::{canonicalize_zip, expand_address_text, normalize_direction, ordinal_to_digits};
