use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::components::AddressComponents;
use crate::core::types::{LocationId, RecordId};
use crate::parsing::address::parse_address;

/// A known location in the reference catalog.
///
/// Owned by the calling collaborator; the core only reads it. The raw
/// street/city/state fields are kept as supplied so diagnostics can show
/// what the catalog actually contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Unique identifier
    pub id: LocationId,

    /// Raw street line (number, directional, name, suffix, unit)
    pub street: String,

    pub city: String,

    pub state: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,

    /// Precomputed components; parsed from the raw fields when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<AddressComponents>,

    /// Free-form metadata carried through to candidates untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl LocationRecord {
    pub fn new(
        id: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            id: LocationId::new(id),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: String::new(),
            components: None,
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: AddressComponents) -> Self {
        self.components = Some(components);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Components for matching: the precomputed set when present, otherwise
    /// parsed fresh from the joined raw fields.
    #[must_use]
    pub fn resolved_components(&self) -> AddressComponents {
        if let Some(components) = &self.components {
            return components.clone();
        }
        let joined = [
            self.street.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.postal_code.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
        parse_address(&joined)
    }
}

/// An incoming record that needs address resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Raw address text as received from the source
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub raw_address: String,

    /// Precomputed components hint; takes precedence over the raw text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_hint: Option<AddressComponents>,

    /// Free-form attributes; their values serve as a text fallback when no
    /// raw address is present
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl ServiceRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            raw_address: String::new(),
            components_hint: None,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_raw_address(mut self, raw_address: impl Into<String>) -> Self {
        self.raw_address = raw_address.into();
        self
    }

    #[must_use]
    pub fn with_components_hint(mut self, components: AddressComponents) -> Self {
        self.components_hint = Some(components);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Components for matching, resolved in precedence order: hint, raw
    /// address text, then the joined attribute values.
    #[must_use]
    pub fn resolved_components(&self) -> AddressComponents {
        if let Some(components) = &self.components_hint {
            return components.clone();
        }
        if !self.raw_address.is_empty() {
            return parse_address(&self.raw_address);
        }
        let fallback = self
            .attributes
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        parse_address(&fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_resolves_from_raw_fields() {
        let location = LocationRecord::new("loc-1", "601 NE 1st Ave", "Miami", "FL")
            .with_postal_code("33132");

        let components = location.resolved_components();
        assert_eq!(components.street_number, "601");
        assert_eq!(components.street_direction, "NE");
        assert_eq!(components.city, "MIAMI");
        assert_eq!(components.postal_code, "33132");
    }

    #[test]
    fn test_location_prefers_precomputed_components() {
        let precomputed = AddressComponents {
            street_number: "9".to_string(),
            street_name: "OAK".to_string(),
            ..AddressComponents::default()
        };
        let location = LocationRecord::new("loc-2", "601 NE 1st Ave", "Miami", "FL")
            .with_components(precomputed.clone());

        assert_eq!(location.resolved_components(), precomputed);
    }

    #[test]
    fn test_record_falls_back_to_attributes() {
        let record = ServiceRecord::new("row-1")
            .with_attribute("street", "123 Main St")
            .with_attribute("town", "Chicago IL 60601");

        let components = record.resolved_components();
        assert_eq!(components.street_number, "123");
        assert_eq!(components.city, "CHICAGO");
    }

    #[test]
    fn test_record_hint_takes_precedence() {
        let hint = AddressComponents {
            street_number: "500".to_string(),
            street_name: "ELM".to_string(),
            ..AddressComponents::default()
        };
        let record = ServiceRecord::new("row-2")
            .with_raw_address("123 Main St")
            .with_components_hint(hint.clone());

        assert_eq!(record.resolved_components(), hint);
    }

    #[test]
    fn test_empty_record_resolves_to_empty_components() {
        let record = ServiceRecord::new("row-3");
        assert!(record.resolved_components().is_empty());
    }
}
