use serde::{Deserialize, Serialize};

/// Normalized components of a single postal address.
///
/// Produced once by [`crate::parsing::address::parse_address`] and never
/// mutated afterwards. All fields are uppercase, defaulting to empty when a
/// component could not be extracted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponents {
    /// House number, verbatim including hyphen/slash separators (e.g. "74-21")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_number: String,

    /// Compass directional in short form (N, NE, ...)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_direction: String,

    /// Street name with numbered streets in digit form ("46", not "FORTY-SIXTH")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_name: String,

    /// Road-type token (STREET, AVENUE, ...)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub street_suffix: String,

    /// Unit designation including its marker (e.g. "UNIT 5", "APARTMENT 2B")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,

    /// Two-letter US state abbreviation
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,

    /// Five-digit postal code (zip+4 suffixes are discarded)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
}

impl AddressComponents {
    /// Deterministic key for exact-match lookups.
    ///
    /// Returns `None` unless both street number and street name are present.
    /// The unit is deliberately excluded: two units at the same street
    /// address canonically match.
    #[must_use]
    pub fn canonical_key(&self) -> Option<String> {
        if self.street_number.is_empty() || self.street_name.is_empty() {
            return None;
        }
        Some(
            [
                self.street_number.as_str(),
                self.street_direction.as_str(),
                self.street_name.as_str(),
                self.street_suffix.as_str(),
                self.city.as_str(),
                self.state.as_str(),
                self.postal_code.as_str(),
            ]
            .join("|"),
        )
    }

    /// True when every component is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.street_number.is_empty()
            && self.street_direction.is_empty()
            && self.street_name.is_empty()
            && self.street_suffix.is_empty()
            && self.unit.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.postal_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> AddressComponents {
        AddressComponents {
            street_number: "601".to_string(),
            street_direction: "NE".to_string(),
            street_name: "1".to_string(),
            street_suffix: "AVENUE".to_string(),
            unit: "UNIT 5".to_string(),
            city: "MIAMI".to_string(),
            state: "FL".to_string(),
            postal_code: "33132".to_string(),
        }
    }

    #[test]
    fn test_canonical_key_joins_in_order() {
        let key = populated().canonical_key().unwrap();
        assert_eq!(key, "601|NE|1|AVENUE|MIAMI|FL|33132");
    }

    #[test]
    fn test_canonical_key_excludes_unit() {
        let mut with_unit = populated();
        let mut without_unit = populated();
        without_unit.unit = String::new();
        with_unit.unit = "APARTMENT 9".to_string();

        assert_eq!(with_unit.canonical_key(), without_unit.canonical_key());
    }

    #[test]
    fn test_canonical_key_requires_number_and_name() {
        let mut missing_number = populated();
        missing_number.street_number = String::new();
        assert!(missing_number.canonical_key().is_none());

        let mut missing_name = populated();
        missing_name.street_name = String::new();
        assert!(missing_name.canonical_key().is_none());

        assert!(AddressComponents::default().canonical_key().is_none());
    }

    #[test]
    fn test_is_empty() {
        assert!(AddressComponents::default().is_empty());
        assert!(!populated().is_empty());
    }

    #[test]
    fn test_serde_round_trip_skips_empty_fields() {
        let mut components = populated();
        components.unit = String::new();

        let json = serde_json::to_string(&components).unwrap();
        assert!(!json.contains("unit"));

        let back: AddressComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(back, components);
    }
}
