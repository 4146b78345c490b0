//! Tag-object extraction engine shared by all metadata parsers.
//!
//! Every concrete parser holds a [`TagExtractor`] and builds its result from
//! the extractor's primitives. The extractor takes care of namespace prefix
//! resolution, subtag presence, single versus list-valued subtags and the
//! empty result when data is missing, so parsers only declare which subtags
//! they read.

use std::sync::Arc;

use crate::prefix::{PrefixMap, TagName};
use crate::tag::TagObject;

/// A parser turning one tag-object occurrence into a typed value.
///
/// Parsers are passed to [`TagExtractor::parse_subtag`] by generic
/// parameter; the set of sub-parsers is fixed when a parser is built.
pub trait TagParser {
    /// The value produced from one occurrence.
    type Output;

    /// Parse one occurrence of the element this parser handles.
    fn parse<T: TagObject>(&self, tag: &T) -> Self::Output;
}

/// Name-resolving, absence-tolerant access into tag-objects.
///
/// Holds the document's prefix map, shared read-only with every parser
/// built from the same document.
#[derive(Debug, Clone, Default)]
pub struct TagExtractor {
    prefixes: Arc<PrefixMap>,
}

impl TagExtractor {
    /// Create an extractor resolving names against `prefixes`.
    #[must_use]
    pub fn new(prefixes: Arc<PrefixMap>) -> Self {
        Self { prefixes }
    }

    /// Resolve `name` to the key it is stored under in `tag`.
    ///
    /// Returns the first candidate key present in `tag`, or the preferred
    /// candidate when none is present.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use opds_accessibility::{PrefixMap, TagExtractor, TagName};
    /// use serde_json::json;
    ///
    /// let prefixes: PrefixMap = [("atom", "http://www.w3.org/2005/Atom")].into_iter().collect();
    /// let extractor = TagExtractor::new(Arc::new(prefixes));
    ///
    /// let name = TagName::qualified("http://www.w3.org/2005/Atom", "title");
    /// assert_eq!(extractor.resolve(&json!({}), name), "atom:title");
    /// assert_eq!(extractor.resolve(&json!({}), "accessibility".into()), "accessibility");
    /// ```
    #[must_use]
    pub fn resolve<T: TagObject>(&self, tag: &T, name: TagName<'_>) -> String {
        let candidates = name.candidate_keys(&self.prefixes);
        let present = candidates
            .iter()
            .position(|key| !tag.occurrences(key).is_empty())
            .unwrap_or(0);
        candidates
            .into_iter()
            .nth(present)
            .unwrap_or_else(|| name.local().to_string())
    }

    /// All occurrences of a subtag, in document order.
    pub fn subtags<'t, 'n, T: TagObject>(&self, tag: &'t T, name: impl Into<TagName<'n>>) -> &'t [T] {
        let key = self.resolve(tag, name.into());
        let occurrences = tag.occurrences(&key);
        if occurrences.is_empty() {
            tracing::debug!(subtag = %key, "Subtag absent");
        }
        occurrences
    }

    /// First occurrence of a subtag.
    pub fn first_subtag<'t, 'n, T: TagObject>(
        &self,
        tag: &'t T,
        name: impl Into<TagName<'n>>,
    ) -> Option<&'t T> {
        self.subtags(tag, name).first()
    }

    /// Text content of the first occurrence of a subtag.
    ///
    /// Returns `None` when the subtag is absent or its first occurrence has
    /// no text. An empty text is returned as `Some("")`.
    ///
    /// # Examples
    /// ```
    /// use opds_accessibility::TagExtractor;
    /// use serde_json::json;
    ///
    /// let extractor = TagExtractor::default();
    /// let tag = json!({ "conformsTo": [{ "_": "" }] });
    ///
    /// assert_eq!(extractor.parse_subtag_content(&tag, "conformsTo"), Some(String::new()));
    /// assert_eq!(extractor.parse_subtag_content(&tag, "certifier"), None);
    /// ```
    pub fn parse_subtag_content<'n, T: TagObject>(
        &self,
        tag: &T,
        name: impl Into<TagName<'n>>,
    ) -> Option<String> {
        let subtag = self.first_subtag(tag, name)?;
        let text = subtag.leaf_text();
        if text.is_none() {
            tracing::debug!("Subtag has no text content");
        }
        text.map(str::to_string)
    }

    /// Text content of every occurrence of a subtag, in document order.
    ///
    /// Empty texts are kept. An occurrence without text contributes an empty
    /// string so the result has one entry per occurrence.
    pub fn parse_subtags_content<'n, T: TagObject>(
        &self,
        tag: &T,
        name: impl Into<TagName<'n>>,
    ) -> Vec<String> {
        self.subtags(tag, name)
            .iter()
            .map(|subtag| subtag.leaf_text().unwrap_or_default().to_string())
            .collect()
    }

    /// Parse the first occurrence of a subtag with `parser`.
    ///
    /// Returns `None`, the empty result, when the subtag is absent.
    pub fn parse_subtag<'n, T, P>(
        &self,
        tag: &T,
        name: impl Into<TagName<'n>>,
        parser: &P,
    ) -> Option<P::Output>
    where
        T: TagObject,
        P: TagParser,
    {
        self.first_subtag(tag, name).map(|subtag| parser.parse(subtag))
    }

    /// Parse every occurrence of a subtag with `parser`, in document order.
    pub fn parse_subtags<'n, T, P>(
        &self,
        tag: &T,
        name: impl Into<TagName<'n>>,
        parser: &P,
    ) -> Vec<P::Output>
    where
        T: TagObject,
        P: TagParser,
    {
        self.subtags(tag, name)
            .iter()
            .map(|subtag| parser.parse(subtag))
            .collect()
    }

    /// Value of an attribute on `tag`.
    pub fn parse_attribute<T: TagObject>(&self, tag: &T, name: &str) -> Option<String> {
        tag.attribute(name).map(str::to_string)
    }

    /// Value of an attribute on the first occurrence of a subtag.
    pub fn parse_subtag_attribute<'n, T: TagObject>(
        &self,
        tag: &T,
        name: impl Into<TagName<'n>>,
        attribute: &str,
    ) -> Option<String> {
        self.first_subtag(tag, name)
            .and_then(|subtag| self.parse_attribute(subtag, attribute))
    }
}
