//! Configuration constants and conversion options.

/// Key holding the text content of an element in a tag-object.
pub const LEAF_TEXT_KEY: &str = "_";

/// Key holding the attributes of an element in a tag-object.
pub const ATTRIBUTES_KEY: &str = "$";

/// Atom syndication namespace.
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// OPDS catalog namespace.
pub const OPDS_NS: &str = "http://opds-spec.org/2010/catalog";

/// Dublin Core terms namespace.
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

/// Options for converting XML elements into tag-objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Trim leading and trailing whitespace from text content.
    pub trim: bool,

    /// Normalize text content to Unicode NFC.
    pub normalize_unicode: bool,

    /// Store element attributes under [`ATTRIBUTES_KEY`].
    pub keep_attributes: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            trim: true,
            normalize_unicode: false,
            keep_attributes: true,
        }
    }
}

impl ConvertOptions {
    /// Set whitespace trimming.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Set NFC normalization.
    #[must_use]
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Set whether attributes are kept.
    #[must_use]
    pub fn with_keep_attributes(mut self, keep: bool) -> Self {
        self.keep_attributes = keep;
        self
    }
}
