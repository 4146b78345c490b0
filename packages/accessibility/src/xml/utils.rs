//! XML utility functions for navigating `roxmltree` DOM trees.

use roxmltree::Node;

use crate::prefix::qualify;

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Local tag name (e.g., "entry" not "atom:entry")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use opds_accessibility::xml::get_tag_name;
///
/// let xml = r#"<atom:entry xmlns:atom="http://www.w3.org/2005/Atom"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "entry");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the tag-object key for an element.
///
/// Elements in the in-scope default namespace, or in no namespace, are keyed
/// by their bare local name even when a named prefix is bound to the same
/// URI. Other elements get the prefix bound to their namespace.
///
/// # Arguments
/// * `node` - XML element
///
/// # Returns
/// Key such as "dcterms:conformsTo" or "accessibility"
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use opds_accessibility::xml::qualified_name;
///
/// let xml = r#"<atom:entry xmlns:atom="http://www.w3.org/2005/Atom"/>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(qualified_name(doc.root_element()), "atom:entry");
/// ```
pub fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let Some(namespace) = tag.namespace() else {
        return tag.name().to_string();
    };

    if node.default_namespace() == Some(namespace) {
        return tag.name().to_string();
    }

    match node.lookup_prefix(namespace) {
        Some(prefix) => qualify(prefix, tag.name()),
        None => tag.name().to_string(),
    }
}

/// Find the first child element with the given local name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Local tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    element_children(node).find(|child| get_tag_name(*child) == tag)
}

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Concatenate the text nodes directly under an element.
///
/// # Arguments
/// * `node` - Element to get text from
///
/// # Returns
/// Direct text content, or empty string if none; text inside child
/// elements is not included
pub fn direct_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
