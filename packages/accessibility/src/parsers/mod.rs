//! Parsers for accessibility metadata elements.
//!
//! Each parser holds a [`TagExtractor`](crate::extract::TagExtractor) and
//! names the subtags it reads. Unrecognized sibling subtags are ignored.

mod accessibility;
mod conformance;
mod ways_of_reading;

pub use accessibility::AccessibilityParser;
pub use conformance::ConformanceParser;
pub use ways_of_reading::WaysOfReadingParser;
