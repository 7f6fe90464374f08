//! Compact rendering
//!
//! Single-line output: no whitespace between tags, remaining text trimmed
//! with interior runs folded to one space. Attribute text is untouched.

use super::{content_children, with_declarations, write_close_tag, write_open_tag};
use crate::document::{XmlDocument, XmlNode};

/// Serialize a document onto a single line.
#[must_use]
pub fn serialize_compact(doc: &XmlDocument) -> String {
    let mut body = String::new();
    for node in &doc.nodes {
        if node.is_element() {
            render_node(&mut body, node);
        }
    }
    with_declarations(&doc.declarations, body.trim())
}

fn render_node(out: &mut String, node: &XmlNode) {
    match node {
        XmlNode::Element {
            name,
            attributes,
            children,
        } => {
            write_open_tag(out, name, attributes);
            for child in content_children(children) {
                render_node(out, child);
            }
            write_close_tag(out, name);
        }
        XmlNode::Text { value } => out.push_str(&collapse_whitespace(value)),
    }
}

/// Trim and fold interior whitespace runs down to a single space.
fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
