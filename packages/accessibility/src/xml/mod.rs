//! XML-to-tag-object conversion.
//!
//! Produces the xml2js-style trees the metadata parsers read, from documents
//! parsed with `roxmltree`.

mod convert;
mod utils;

pub use convert::{parse_document, to_tag_object, TagDocument};
pub use utils::{direct_text, element_children, find_child, get_tag_name, qualified_name};
