//! Parser for `<accessibility>` elements.

use std::sync::Arc;

use super::conformance::ConformanceParser;
use super::ways_of_reading::WaysOfReadingParser;
use crate::extract::{TagExtractor, TagParser};
use crate::prefix::PrefixMap;
use crate::tag::TagObject;
use crate::types::Accessibility;

/// Parser for `<accessibility>` elements.
///
/// Delegates `<conformance>` and `<waysOfReading>` to their own parsers. A
/// missing child leaves the matching field `None`; other children, such as
/// `<hazards>`, are ignored.
#[derive(Debug, Clone, Default)]
pub struct AccessibilityParser {
    extractor: TagExtractor,
    conformance: ConformanceParser,
    ways_of_reading: WaysOfReadingParser,
}

impl AccessibilityParser {
    /// Create a parser resolving names against `prefixes`.
    ///
    /// The sub-parsers share the same prefix map.
    #[must_use]
    pub fn new(prefixes: Arc<PrefixMap>) -> Self {
        Self {
            conformance: ConformanceParser::new(Arc::clone(&prefixes)),
            ways_of_reading: WaysOfReadingParser::new(Arc::clone(&prefixes)),
            extractor: TagExtractor::new(prefixes),
        }
    }
}

impl TagParser for AccessibilityParser {
    type Output = Accessibility;

    fn parse<T: TagObject>(&self, tag: &T) -> Accessibility {
        let conformance = self
            .extractor
            .parse_subtag(tag, "conformance", &self.conformance);
        let ways_of_reading = self
            .extractor
            .parse_subtag(tag, "waysOfReading", &self.ways_of_reading);

        Accessibility::new(conformance, ways_of_reading)
    }
}
