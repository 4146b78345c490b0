//! OPDS catalog entry parsing.
//!
//! Reads the Atom `id` and `title` of an entry and hands its
//! `<accessibility>` element to the [`AccessibilityParser`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{ConvertOptions, ATOM_NS};
use crate::error::{AccessibilityError, Result};
use crate::extract::{TagExtractor, TagParser};
use crate::parsers::AccessibilityParser;
use crate::prefix::{PrefixMap, TagName};
use crate::tag::TagObject;
use crate::types::Accessibility;
use crate::xml::parse_document;

const ATOM_ID: TagName<'static> = TagName::qualified(ATOM_NS, "id");
const ATOM_TITLE: TagName<'static> = TagName::qualified(ATOM_NS, "title");
const ATOM_ENTRY: TagName<'static> = TagName::qualified(ATOM_NS, "entry");

/// A catalog entry with its accessibility metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Atom `<id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Atom `<title>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Parsed `<accessibility>`, `None` when the entry has none.
    pub accessibility: Option<Accessibility>,
}

/// Parser for Atom `<entry>` elements.
#[derive(Debug, Clone, Default)]
pub struct EntryParser {
    extractor: TagExtractor,
    accessibility: AccessibilityParser,
}

impl EntryParser {
    /// Create a parser resolving names against `prefixes`.
    #[must_use]
    pub fn new(prefixes: Arc<PrefixMap>) -> Self {
        Self {
            accessibility: AccessibilityParser::new(Arc::clone(&prefixes)),
            extractor: TagExtractor::new(prefixes),
        }
    }
}

impl TagParser for EntryParser {
    type Output = Entry;

    fn parse<T: TagObject>(&self, tag: &T) -> Entry {
        let accessibility_tags = self.extractor.subtags(tag, "accessibility");
        if accessibility_tags.len() > 1 {
            tracing::warn!(
                count = accessibility_tags.len(),
                "Entry has several <accessibility> elements, using the first"
            );
        }

        Entry {
            id: self.extractor.parse_subtag_content(tag, ATOM_ID),
            title: self.extractor.parse_subtag_content(tag, ATOM_TITLE),
            accessibility: accessibility_tags
                .first()
                .map(|subtag| self.accessibility.parse(subtag)),
        }
    }
}

/// Parse the entries of an OPDS document.
///
/// Accepts a single `<entry>` document or a `<feed>` with `<entry>`
/// children. The prefix map comes from the namespace declarations on the
/// root element.
///
/// # Errors
/// Returns `XmlParse` for malformed XML and `MissingElement` when the root
/// is neither `<entry>` nor `<feed>`.
///
/// # Examples
/// ```
/// use opds_accessibility::parse_entries;
///
/// let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom">
///   <title>Accessible book</title>
///   <accessibility>
///     <waysOfReading><feature>Has alternative text</feature></waysOfReading>
///   </accessibility>
/// </entry>"#;
///
/// let entries = parse_entries(xml).unwrap();
/// assert_eq!(entries[0].title.as_deref(), Some("Accessible book"));
/// ```
pub fn parse_entries(xml: &str) -> Result<Vec<Entry>> {
    parse_entries_with(xml, &ConvertOptions::default())
}

/// Parse the entries of an OPDS document with explicit conversion options.
///
/// # Errors
/// See [`parse_entries`].
pub fn parse_entries_with(xml: &str, options: &ConvertOptions) -> Result<Vec<Entry>> {
    let document = parse_document(xml, options)?;
    let parser = EntryParser::new(Arc::new(document.prefixes));

    match document.root.as_str() {
        "entry" => Ok(vec![parser.parse(&document.tag)]),
        "feed" => {
            let entries = parser
                .extractor
                .parse_subtags(&document.tag, ATOM_ENTRY, &parser);
            tracing::debug!(count = entries.len(), "Parsed feed entries");
            Ok(entries)
        }
        other => Err(AccessibilityError::MissingElement {
            element: "<entry> or <feed>".to_string(),
            context: format!("document root <{other}>"),
        }),
    }
}
