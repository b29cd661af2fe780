//! Record schema and byte codec.
//!
//! Records are stored as compact JSON. The field names are part of the
//! stored shape: animal fields are lowercase, query-result fields are
//! capitalized (`Key`, `Record`).

use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;

/// Basic details of an animal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Region the animal comes from.
    pub origin: String,
    /// Common name of the animal.
    pub name: String,
    /// Descriptive colour attribute.
    pub colour: String,
}

impl Animal {
    /// Create a record from its three attributes.
    pub fn new(
        origin: impl Into<String>,
        name: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            name: name.into(),
            colour: colour.into(),
        }
    }

    /// Encode the record to its stored byte form.
    pub fn to_bytes(&self) -> LedgerResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a record from its stored byte form.
    pub fn from_bytes(bytes: &[u8]) -> LedgerResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// A ledger key paired with its decoded record, as returned by range scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The key the record is stored under.
    #[serde(rename = "Key")]
    pub key: String,
    /// The decoded record.
    #[serde(rename = "Record")]
    pub record: Animal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animal_stored_shape_uses_lowercase_fields() {
        let animal = Animal::new("Europe", "Cow", "brown");
        let json: serde_json::Value =
            serde_json::from_slice(&animal.to_bytes().unwrap()).unwrap();
        assert_eq!(json["origin"], "Europe");
        assert_eq!(json["name"], "Cow");
        assert_eq!(json["colour"], "brown");
    }

    #[test]
    fn query_result_shape_uses_capitalized_fields() {
        let result = QueryResult {
            key: "ANIMAL1".to_string(),
            record: Animal::new("Europe", "Cow", "brown"),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["Key"], "ANIMAL1");
        assert_eq!(json["Record"]["name"], "Cow");
    }

    #[test]
    fn from_bytes_rejects_malformed_input() {
        let err = Animal::from_bytes(b"not a record").unwrap_err();
        assert!(matches!(err, crate::LedgerError::Codec { .. }));
    }
}
