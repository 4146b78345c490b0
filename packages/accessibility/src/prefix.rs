//! Namespace prefix map and tag name resolution.
//!
//! Converted tag-objects key their children by the name as written in the
//! source document (`atom:title`, or just `title` under a default
//! namespace). Parsers ask for subtags by namespace and local name; the
//! [`PrefixMap`] collected from the document's `xmlns` declarations turns
//! that into the key to look up.

use std::collections::BTreeMap;

use roxmltree::Node;

/// Mapping from namespace prefix to namespace URI.
///
/// The default namespace (`xmlns="..."`) is stored under the empty prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixMap {
    prefixes: BTreeMap<String, String>,
}

impl PrefixMap {
    /// Create an empty prefix map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the namespace declarations in scope on an element.
    ///
    /// # Examples
    /// ```
    /// use roxmltree::Document;
    /// use opds_accessibility::PrefixMap;
    ///
    /// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"
    ///                    xmlns:dcterms="http://purl.org/dc/terms/"/>"#;
    /// let doc = Document::parse(xml).unwrap();
    /// let prefixes = PrefixMap::from_node(doc.root_element());
    ///
    /// assert_eq!(prefixes.namespace("dcterms"), Some("http://purl.org/dc/terms/"));
    /// assert_eq!(prefixes.namespace(""), Some("http://www.w3.org/2005/Atom"));
    /// ```
    #[must_use]
    pub fn from_node(node: Node<'_, '_>) -> Self {
        node.namespaces()
            .map(|ns| (ns.name().unwrap_or_default(), ns.uri()))
            .collect()
    }

    /// Bind a prefix to a namespace URI, returning the previous binding.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        self.prefixes.insert(prefix.into(), namespace.into())
    }

    /// Get the namespace URI bound to a prefix.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Get all prefixes bound to a namespace URI.
    ///
    /// Prefixes come in lexical order, so the default namespace (empty
    /// prefix) is yielded first.
    pub fn prefixes_for<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.prefixes
            .iter()
            .filter(move |(_, uri)| uri.as_str() == namespace)
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Number of bound prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Check if no prefix is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<P, N> FromIterator<(P, N)> for PrefixMap
where
    P: Into<String>,
    N: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        Self {
            prefixes: iter
                .into_iter()
                .map(|(prefix, uri)| (prefix.into(), uri.into()))
                .collect(),
        }
    }
}

/// Name of a subtag as a parser asks for it.
///
/// A bare name is looked up as-is. A qualified name carries a namespace URI
/// that is resolved to a document prefix through a [`PrefixMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagName<'a> {
    namespace: Option<&'a str>,
    local: &'a str,
}

impl<'a> TagName<'a> {
    /// A name without namespace.
    #[must_use]
    pub const fn bare(local: &'a str) -> Self {
        Self {
            namespace: None,
            local,
        }
    }

    /// A name in the given namespace.
    #[must_use]
    pub const fn qualified(namespace: &'a str, local: &'a str) -> Self {
        Self {
            namespace: Some(namespace),
            local,
        }
    }

    /// The namespace URI, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    /// The local part of the name.
    #[must_use]
    pub fn local(&self) -> &'a str {
        self.local
    }

    /// All keys this name may appear under, most preferred first.
    ///
    /// Bare names and names whose namespace has no binding yield only the
    /// local name. A namespace bound to the default prefix yields the local
    /// name too.
    pub(crate) fn candidate_keys(&self, prefixes: &PrefixMap) -> Vec<String> {
        let Some(namespace) = self.namespace else {
            return vec![self.local.to_string()];
        };

        let keys: Vec<String> = prefixes
            .prefixes_for(namespace)
            .map(|prefix| qualify(prefix, self.local))
            .collect();

        if keys.is_empty() {
            tracing::trace!(
                namespace,
                local = self.local,
                "No prefix bound for namespace, using unprefixed name"
            );
            vec![self.local.to_string()]
        } else {
            keys
        }
    }
}

impl<'a> From<&'a str> for TagName<'a> {
    fn from(local: &'a str) -> Self {
        Self::bare(local)
    }
}

/// Join a prefix and a local name into a tag-object key.
pub(crate) fn qualify(prefix: &str, local: &str) -> String {
    if prefix.is_empty() {
        local.to_string()
    } else {
        format!("{prefix}:{local}")
    }
}
