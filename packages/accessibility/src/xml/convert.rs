//! Conversion of `roxmltree` elements into tag-objects.

use roxmltree::{Document, Node};
use serde_json::{Map, Value};
use unicode_normalization::UnicodeNormalization;

use super::utils::{direct_text, element_children, get_tag_name, qualified_name};
use crate::config::{ConvertOptions, ATTRIBUTES_KEY, LEAF_TEXT_KEY};
use crate::error::Result;
use crate::prefix::{qualify, PrefixMap};

/// A converted XML document.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDocument {
    /// Local name of the root element.
    pub root: String,

    /// Namespace declarations in scope on the root element.
    pub prefixes: PrefixMap,

    /// The root element as a tag-object.
    pub tag: Value,
}

/// Parse XML text and convert its root element.
///
/// # Errors
/// Returns `XmlParse` if the text is not well-formed XML.
///
/// # Examples
/// ```
/// use opds_accessibility::config::ConvertOptions;
/// use opds_accessibility::xml::parse_document;
/// use serde_json::json;
///
/// let xml = "<conformance><conformsTo>X</conformsTo><certifier/></conformance>";
/// let document = parse_document(xml, &ConvertOptions::default()).unwrap();
///
/// assert_eq!(document.root, "conformance");
/// assert_eq!(
///     document.tag,
///     json!({ "conformsTo": [{ "_": "X" }], "certifier": [{ "_": "" }] })
/// );
/// ```
pub fn parse_document(xml: &str, options: &ConvertOptions) -> Result<TagDocument> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    Ok(TagDocument {
        root: get_tag_name(root).to_string(),
        prefixes: PrefixMap::from_node(root),
        tag: to_tag_object(root, options),
    })
}

/// Convert an element into a tag-object.
///
/// Child elements are grouped by their name as written in the document
/// into sequences, in document order; a single child is still wrapped in a
/// sequence. Text content goes under `"_"` when it is not blank or when the
/// element has no child elements, so `<feature/>` becomes `{"_": ""}`.
/// Attributes go under `"$"` when kept. Namespace declarations are not
/// attributes. A child element named `_` keeps its key and the text of the
/// parent is dropped.
pub fn to_tag_object(node: Node<'_, '_>, options: &ConvertOptions) -> Value {
    let mut map = Map::new();

    if options.keep_attributes {
        let attributes: Map<String, Value> = node
            .attributes()
            .map(|attr| {
                let name = match attr.namespace().and_then(|ns| node.lookup_prefix(ns)) {
                    Some(prefix) => qualify(prefix, attr.name()),
                    None => attr.name().to_string(),
                };
                (name, Value::String(attr.value().to_string()))
            })
            .collect();
        if !attributes.is_empty() {
            map.insert(ATTRIBUTES_KEY.to_string(), Value::Object(attributes));
        }
    }

    let mut has_children = false;
    for child in element_children(node) {
        has_children = true;
        let occurrences = map
            .entry(qualified_name(child))
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(items) = occurrences {
            items.push(to_tag_object(child, options));
        }
    }

    let text = clean_text(direct_text(node), options);
    if !has_children || !text.trim().is_empty() {
        if map.contains_key(LEAF_TEXT_KEY) {
            tracing::warn!(
                tag = %qualified_name(node),
                "Child element <_> collides with the text key, dropping text"
            );
        } else {
            map.insert(LEAF_TEXT_KEY.to_string(), Value::String(text));
        }
    }

    Value::Object(map)
}

fn clean_text(text: String, options: &ConvertOptions) -> String {
    let text = if options.trim {
        text.trim().to_string()
    } else {
        text
    };

    if options.normalize_unicode {
        text.nfc().collect()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ATOM_NS, OPDS_NS};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn convert(xml: &str, options: &ConvertOptions) -> Value {
        parse_document(xml, options).unwrap().tag
    }

    #[test]
    fn test_single_child_is_wrapped_in_sequence() {
        let xml = "<conformance><conformsTo>X</conformsTo></conformance>";

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "conformsTo": [{ "_": "X" }] })
        );
    }

    #[test]
    fn test_repeated_children_keep_document_order() {
        let xml = r#"<waysOfReading>
            <feature>A</feature>
            <other>skip</other>
            <feature></feature>
            <feature>C</feature>
        </waysOfReading>"#;

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({
                "feature": [{ "_": "A" }, { "_": "" }, { "_": "C" }],
                "other": [{ "_": "skip" }]
            })
        );
    }

    #[test]
    fn test_attributes_are_kept_under_dollar_key() {
        let xml = r#"<link rel="alternate" href="/a"/>"#;

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "$": { "rel": "alternate", "href": "/a" }, "_": "" })
        );
        assert_eq!(
            convert(xml, &ConvertOptions::default().with_keep_attributes(false)),
            json!({ "_": "" })
        );
    }

    #[test]
    fn test_namespace_declarations_are_not_attributes() {
        let xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"><title>T</title></entry>"#;

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "title": [{ "_": "T" }] })
        );
    }

    #[test]
    fn test_prefixed_children_keep_prefix() {
        let xml = r#"<entry xmlns:atom="http://www.w3.org/2005/Atom">
            <atom:title>T</atom:title>
        </entry>"#;

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "atom:title": [{ "_": "T" }] })
        );
    }

    #[test]
    fn test_default_namespace_shared_with_prefix_keeps_bare_keys() {
        let expected = json!({
            "title": [{ "_": "T" }],
            "accessibility": [{ "conformance": [{ "conformsTo": [{ "_": "X" }] }] }]
        });

        for declarations in [
            r#"xmlns:atom="http://www.w3.org/2005/Atom" xmlns="http://www.w3.org/2005/Atom""#,
            r#"xmlns="http://www.w3.org/2005/Atom" xmlns:atom="http://www.w3.org/2005/Atom""#,
        ] {
            let xml = format!(
                "<entry {declarations}><title>T</title>\
                 <accessibility><conformance><conformsTo>X</conformsTo></conformance></accessibility>\
                 </entry>"
            );

            assert_eq!(convert(&xml, &ConvertOptions::default()), expected);
        }
    }

    #[test]
    fn test_child_redeclaring_default_namespace_with_prefix() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
            <entry xmlns:a="http://www.w3.org/2005/Atom"><a:title>T</a:title></entry>
        </feed>"#;

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "entry": [{ "title": [{ "_": "T" }] }] })
        );
    }

    #[test]
    fn test_child_named_underscore_keeps_its_key() {
        let xml = "<root>text<_>inner</_></root>";

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "_": [{ "_": "inner" }] })
        );
    }

    #[test]
    fn test_trim_option() {
        let xml = "<feature>  spaced  </feature>";

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "_": "spaced" })
        );
        assert_eq!(
            convert(xml, &ConvertOptions::default().with_trim(false)),
            json!({ "_": "  spaced  " })
        );
    }

    #[test]
    fn test_normalize_unicode_option() {
        // "e" followed by a combining acute accent
        let xml = "<feature>caf\u{65}\u{301}</feature>";
        let options = ConvertOptions::default().with_normalize_unicode(true);

        assert_eq!(convert(xml, &options), json!({ "_": "caf\u{e9}" }));
    }

    #[test]
    fn test_cdata_is_text() {
        let xml = "<feature><![CDATA[a < b]]></feature>";

        assert_eq!(
            convert(xml, &ConvertOptions::default()),
            json!({ "_": "a < b" })
        );
    }

    #[test]
    fn test_parse_document_metadata() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opds="http://opds-spec.org/2010/catalog"/>"#;
        let document = parse_document(xml, &ConvertOptions::default()).unwrap();

        assert_eq!(document.root, "feed");
        assert_eq!(document.prefixes.namespace(""), Some(ATOM_NS));
        assert_eq!(document.prefixes.namespace("opds"), Some(OPDS_NS));
    }

    #[test]
    fn test_parse_document_malformed() {
        let result = parse_document("<entry><title>", &ConvertOptions::default());
        assert!(result.is_err());
    }
}
