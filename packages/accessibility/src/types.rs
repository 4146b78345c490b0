//! Accessibility metadata value objects.
//!
//! These are built once by the parsers and not changed afterwards. Absent
//! values serialize as `null` rather than being dropped, so every object
//! always carries all of its keys.

use serde::{Deserialize, Serialize};

/// Conformance statement of a publication (`<conformance>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conformance {
    /// Standard the publication conforms to (`<conformsTo>`).
    ///
    /// `Some("")` means the element was present but empty.
    pub conforms_to: Option<String>,
}

impl Conformance {
    /// Create a conformance statement.
    #[must_use]
    pub fn new(conforms_to: Option<String>) -> Self {
        Self { conforms_to }
    }
}

/// Ways in which a publication can be read (`<waysOfReading>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaysOfReading {
    /// Feature descriptions in document order, empty strings included.
    pub features: Vec<String>,
}

impl WaysOfReading {
    /// Create a ways-of-reading list.
    #[must_use]
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }
}

/// Accessibility metadata of a catalog entry (`<accessibility>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    /// Parsed `<conformance>`, `None` when the element is absent.
    pub conformance: Option<Conformance>,

    /// Parsed `<waysOfReading>`, `None` when the element is absent.
    pub ways_of_reading: Option<WaysOfReading>,
}

impl Accessibility {
    /// Create accessibility metadata from its parts.
    #[must_use]
    pub fn new(conformance: Option<Conformance>, ways_of_reading: Option<WaysOfReading>) -> Self {
        Self {
            conformance,
            ways_of_reading,
        }
    }

    /// Check if neither part was present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conformance.is_none() && self.ways_of_reading.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_conformance_serializes_absent_value_as_null() {
        let value = serde_json::to_value(Conformance::new(None)).unwrap();
        assert_eq!(value, json!({ "conformsTo": null }));
    }

    #[test]
    fn test_conformance_keeps_empty_string() {
        let value = serde_json::to_value(Conformance::new(Some(String::new()))).unwrap();
        assert_eq!(value, json!({ "conformsTo": "" }));
    }

    #[test]
    fn test_empty_accessibility_has_both_keys() {
        let accessibility = Accessibility::default();
        assert!(accessibility.is_empty());

        let value = serde_json::to_value(&accessibility).unwrap();
        assert_eq!(value, json!({ "conformance": null, "waysOfReading": null }));
    }

    #[test]
    fn test_accessibility_shape() {
        let accessibility = Accessibility::new(
            Some(Conformance::new(Some("X".to_string()))),
            Some(WaysOfReading::new(vec!["A".to_string(), "B".to_string()])),
        );
        assert!(!accessibility.is_empty());

        let value = serde_json::to_value(&accessibility).unwrap();
        assert_eq!(
            value,
            json!({
                "conformance": { "conformsTo": "X" },
                "waysOfReading": { "features": ["A", "B"] }
            })
        );
    }

    #[test]
    fn test_accessibility_deserializes() {
        let accessibility: Accessibility = serde_json::from_value(json!({
            "conformance": { "conformsTo": "X" },
            "waysOfReading": null
        }))
        .unwrap();

        assert_eq!(
            accessibility,
            Accessibility::new(Some(Conformance::new(Some("X".to_string()))), None)
        );
    }
}
