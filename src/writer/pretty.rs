//! Indented rendering
//!
//! Depth-first pre-order over the tree, one construct per rule:
//! - an element with no content children closes on the same line,
//! - an element whose only content child is text collapses to
//!   `<name>text</name>` with the text trimmed,
//! - anything else opens on its own line and indents its children one
//!   four-space unit deeper.
//!
//! Self-closing shorthand is never emitted; `<a/>` in the source renders
//! as `<a></a>`.

use super::{content_children, with_declarations, write_close_tag, write_open_tag};
use crate::document::{XmlDocument, XmlNode};

const INDENT: &str = "    ";

/// Serialize a document with stable four-space indentation.
#[must_use]
pub fn serialize_pretty(doc: &XmlDocument) -> String {
    let mut body = String::new();
    for node in &doc.nodes {
        if node.is_element() {
            render_node(&mut body, node, 0);
        }
    }
    with_declarations(&doc.declarations, body.trim())
}

fn render_node(out: &mut String, node: &XmlNode, depth: usize) {
    match node {
        XmlNode::Element {
            name,
            attributes,
            children,
        } => {
            push_line_start(out, depth);
            write_open_tag(out, name, attributes);

            let content = content_children(children);
            if content.is_empty() {
                write_close_tag(out, name);
            } else if let [XmlNode::Text { value }] = content.as_slice() {
                out.push_str(value.trim());
                write_close_tag(out, name);
            } else {
                for child in content {
                    render_node(out, child, depth + 1);
                }
                push_line_start(out, depth);
                write_close_tag(out, name);
            }
        }
        // Mixed content approximation: interleaved text lands trimmed on
        // its own line at the child indent level.
        XmlNode::Text { value } => {
            push_line_start(out, depth);
            out.push_str(value.trim());
        }
    }
}

fn push_line_start(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::XmlAttribute;

    fn doc_with(nodes: Vec<XmlNode>) -> XmlDocument {
        XmlDocument {
            declarations: String::new(),
            nodes,
        }
    }

    #[test]
    fn test_empty_element_keeps_paired_tags() {
        let doc = doc_with(vec![XmlNode::element("a".to_string())]);
        assert_eq!(serialize_pretty(&doc), "<a></a>");
    }

    #[test]
    fn test_sole_text_child_stays_inline_trimmed() {
        let doc = doc_with(vec![XmlNode::Element {
            name: "a".to_string(),
            attributes: Vec::new(),
            children: vec![XmlNode::text("  hello  ".to_string())],
        }]);
        assert_eq!(serialize_pretty(&doc), "<a>hello</a>");
    }

    #[test]
    fn test_element_children_indent_one_unit() {
        let doc = doc_with(vec![XmlNode::Element {
            name: "r".to_string(),
            attributes: Vec::new(),
            children: vec![
                XmlNode::text("\n  ".to_string()),
                XmlNode::Element {
                    name: "a".to_string(),
                    attributes: Vec::new(),
                    children: vec![XmlNode::text("1".to_string())],
                },
                XmlNode::text("\n".to_string()),
            ],
        }]);
        assert_eq!(serialize_pretty(&doc), "<r>\n    <a>1</a>\n</r>");
    }

    #[test]
    fn test_attributes_render_in_order() {
        let doc = doc_with(vec![XmlNode::Element {
            name: "a".to_string(),
            attributes: vec![
                XmlAttribute::new("z".to_string(), "1".to_string()),
                XmlAttribute::new("a".to_string(), "2".to_string()),
            ],
            children: Vec::new(),
        }]);
        assert_eq!(serialize_pretty(&doc), r#"<a z="1" a="2"></a>"#);
    }

    #[test]
    fn test_mixed_content_text_on_own_line() {
        let doc = doc_with(vec![XmlNode::Element {
            name: "r".to_string(),
            attributes: Vec::new(),
            children: vec![
                XmlNode::text(" note ".to_string()),
                XmlNode::element("a".to_string()),
            ],
        }]);
        assert_eq!(serialize_pretty(&doc), "<r>\n    note\n    <a></a>\n</r>");
    }

    #[test]
    fn test_declarations_prepended_on_own_line() {
        let doc = XmlDocument {
            declarations: "<?xml version=\"1.0\"?>".to_string(),
            nodes: vec![XmlNode::element("r".to_string())],
        };
        assert_eq!(serialize_pretty(&doc), "<?xml version=\"1.0\"?>\n<r></r>");
    }
}
