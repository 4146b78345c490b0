//! Parser for `<waysOfReading>` elements.

use std::sync::Arc;

use crate::extract::{TagExtractor, TagParser};
use crate::prefix::PrefixMap;
use crate::tag::TagObject;
use crate::types::WaysOfReading;

/// Parser for `<waysOfReading>` elements.
///
/// Collects the text of every `<feature>` child. Empty features are kept
/// as empty strings; a missing list yields no features.
#[derive(Debug, Clone, Default)]
pub struct WaysOfReadingParser {
    extractor: TagExtractor,
}

impl WaysOfReadingParser {
    /// Create a parser resolving names against `prefixes`.
    #[must_use]
    pub fn new(prefixes: Arc<PrefixMap>) -> Self {
        Self {
            extractor: TagExtractor::new(prefixes),
        }
    }
}

impl TagParser for WaysOfReadingParser {
    type Output = WaysOfReading;

    fn parse<T: TagObject>(&self, tag: &T) -> WaysOfReading {
        WaysOfReading::new(self.extractor.parse_subtags_content(tag, "feature"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parser() -> WaysOfReadingParser {
        WaysOfReadingParser::new(Arc::new(PrefixMap::new()))
    }

    #[test]
    fn test_extracts_features_in_order() {
        let tag = json!({
            "feature": [
                { "_": "Appearance can be modified" },
                { "_": "Has alternative text" },
                { "_": "Not fully readable in read aloud or dynamic braille" }
            ]
        });

        let result = parser().parse(&tag);

        assert_eq!(
            result.features,
            vec![
                "Appearance can be modified",
                "Has alternative text",
                "Not fully readable in read aloud or dynamic braille",
            ]
        );
    }

    #[test]
    fn test_keeps_empty_features() {
        let tag = json!({
            "feature": [
                { "_": "Appearance can be modified" },
                { "_": "" },
                { "_": "Not fully readable in read aloud or dynamic braille" }
            ]
        });

        let result = parser().parse(&tag);

        assert_eq!(result.features.len(), 3);
        assert_eq!(result.features[1], "");
    }

    #[test]
    fn test_ignores_additional_information() {
        let tag = json!({
            "feature": [{ "_": "Has alternative text" }],
            "additionalAccessibilityInformation": [
                { "_": "High contrast between foreground text and background" }
            ]
        });

        let value = serde_json::to_value(parser().parse(&tag)).unwrap();

        assert_eq!(value, json!({ "features": ["Has alternative text"] }));
    }

    #[test]
    fn test_empty_tag_yields_no_features() {
        let result = parser().parse(&json!({}));

        assert!(result.features.is_empty());
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({ "features": [] })
        );
    }

    #[test]
    fn test_only_additional_information_yields_no_features() {
        let tag = json!({
            "additionalAccessibilityInformation": [
                { "_": "High contrast between foreground text and background" }
            ]
        });

        let result = parser().parse(&tag);

        assert_eq!(result, WaysOfReading::new(Vec::new()));
    }
}
