//! The tag-object capability the extraction engine reads from.
//!
//! A tag-object is one occurrence of an XML element after xml2js-style
//! conversion: child elements are grouped by name into ordered sequences,
//! text content sits under [`LEAF_TEXT_KEY`] and attributes under
//! [`ATTRIBUTES_KEY`].
//!
//! ```text
//! <conformance><conformsTo>X</conformsTo></conformance>
//!
//! { "conformsTo": [ { "_": "X" } ] }
//! ```

use serde_json::Value;

use crate::config::{ATTRIBUTES_KEY, LEAF_TEXT_KEY};

/// Read access to a converted XML element.
///
/// Absence is never an error: a missing subtag is an empty slice and a
/// missing text or attribute is `None`.
pub trait TagObject: Sized {
    /// All occurrences of the subtag stored under `key`, in document order.
    fn occurrences(&self, key: &str) -> &[Self];

    /// Text content of this occurrence.
    fn leaf_text(&self) -> Option<&str>;

    /// Value of the attribute `name` on this occurrence.
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl TagObject for Value {
    fn occurrences(&self, key: &str) -> &[Self] {
        match self.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                tracing::debug!(
                    key,
                    kind = value_kind(other),
                    "Subtag is not wrapped in a sequence, ignoring"
                );
                &[]
            }
            None => &[],
        }
    }

    fn leaf_text(&self) -> Option<&str> {
        match self {
            // xml2js collapses text-only elements to a plain string unless
            // `explicitCharkey` is set; accept both shapes.
            Value::String(text) => Some(text),
            Value::Object(map) => map.get(LEAF_TEXT_KEY).and_then(Value::as_str),
            _ => None,
        }
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(ATTRIBUTES_KEY)?.get(name).and_then(Value::as_str)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
