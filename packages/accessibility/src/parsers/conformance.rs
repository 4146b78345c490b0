//! Parser for `<conformance>` elements.

use std::sync::Arc;

use crate::extract::{TagExtractor, TagParser};
use crate::prefix::PrefixMap;
use crate::tag::TagObject;
use crate::types::Conformance;

/// Parser for `<conformance>` elements.
///
/// Reads the `<conformsTo>` statement. Other children, such as
/// `<certifier>`, are not part of [`Conformance`].
#[derive(Debug, Clone, Default)]
pub struct ConformanceParser {
    extractor: TagExtractor,
}

impl ConformanceParser {
    /// Create a parser resolving names against `prefixes`.
    #[must_use]
    pub fn new(prefixes: Arc<PrefixMap>) -> Self {
        Self {
            extractor: TagExtractor::new(prefixes),
        }
    }
}

impl TagParser for ConformanceParser {
    type Output = Conformance;

    fn parse<T: TagObject>(&self, tag: &T) -> Conformance {
        Conformance::new(self.extractor.parse_subtag_content(tag, "conformsTo"))
    }
}
