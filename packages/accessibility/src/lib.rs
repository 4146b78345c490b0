//! OPDS Accessibility - Typed accessibility metadata from OPDS catalog XML.
//!
//! This crate extracts accessibility metadata (conformance statements and
//! "ways of reading" feature lists) from the tag-object trees produced by an
//! xml2js-style XML-to-object conversion.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use opds_accessibility::{AccessibilityParser, PrefixMap, TagParser};
//! use serde_json::json;
//!
//! let parser = AccessibilityParser::new(Arc::new(PrefixMap::new()));
//! let tag = json!({
//!     "conformance": [{ "conformsTo": [{ "_": "EPUB Accessibility 1.1" }] }],
//!     "waysOfReading": [{ "feature": [{ "_": "Has alternative text" }] }]
//! });
//!
//! let accessibility = parser.parse(&tag);
//! assert_eq!(
//!     accessibility.conformance.unwrap().conforms_to.as_deref(),
//!     Some("EPUB Accessibility 1.1")
//! );
//! ```
//!
//! # Architecture
//!
//! - [`prefix`]: Namespace prefix map and tag name resolution
//! - [`tag`]: The `TagObject` capability over converted XML trees
//! - [`extract`]: Tag-object extraction engine shared by all parsers
//! - [`parsers`]: Conformance, ways-of-reading and accessibility parsers
//! - [`types`]: Domain value objects
//! - [`xml`]: XML-to-tag-object conversion
//! - [`entry`]: OPDS entry parsing on top of the extraction engine
//! - [`config`]: Constants and conversion options
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod extract;
pub mod parsers;
pub mod prefix;
pub mod tag;
pub mod types;
pub mod xml;

// Re-export commonly used items
pub use entry::{parse_entries, Entry, EntryParser};
pub use error::{AccessibilityError, Result};
pub use extract::{TagExtractor, TagParser};
pub use parsers::{AccessibilityParser, ConformanceParser, WaysOfReadingParser};
pub use prefix::{PrefixMap, TagName};
pub use tag::TagObject;
pub use types::{Accessibility, Conformance, WaysOfReading};
