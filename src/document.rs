//! XML document structures

use serde::{Deserialize, Serialize};

/// A parsed XML document.
///
/// Holds the opaque leading declaration block and the top-level node
/// sequence. Text and attribute values are kept in wire form (entities
/// still escaped) so rendering emits them byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDocument {
    /// Leading declaration block (XML declaration, DOCTYPE, comment),
    /// newline-separated, verbatim. Empty when the source had none.
    pub declarations: String,
    /// Top-level nodes. Renderers only emit element nodes.
    pub nodes: Vec<XmlNode>,
}

/// A node in an XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum XmlNode {
    /// An element with ordered attributes and children.
    Element {
        /// Tag name, prefix included when the source carried one.
        name: String,
        /// Attributes in source order.
        attributes: Vec<XmlAttribute>,
        /// Child nodes in source order.
        children: Vec<XmlNode>,
    },
    /// Character data between tags.
    Text {
        /// The raw character data, including surrounding whitespace.
        value: String,
    },
}

/// An attribute on an element. Source order is preserved by the
/// containing `Vec`; names are unique within one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value in wire form.
    pub value: String,
}

impl XmlDocument {
    /// The root element node, if the document has one.
    #[must_use]
    pub fn root(&self) -> Option<&XmlNode> {
        self.nodes.iter().find(|node| node.is_element())
    }

    /// Name of the root element.
    #[must_use]
    pub fn root_name(&self) -> Option<&str> {
        if let Some(XmlNode::Element { name, .. }) = self.root() {
            Some(name.as_str())
        } else {
            None
        }
    }

    /// Total number of elements in the document.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.nodes.iter().map(XmlNode::count_elements).sum()
    }

    /// Total number of attributes across all elements.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.nodes.iter().map(XmlNode::count_attributes).sum()
    }

    /// Deepest element nesting level (the root alone is depth 1).
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(XmlNode::depth).max().unwrap_or(0)
    }
}

impl XmlNode {
    /// Creates an element node with no attributes or children.
    #[must_use]
    pub fn element(name: String) -> Self {
        XmlNode::Element {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    #[must_use]
    pub fn text(value: String) -> Self {
        XmlNode::Text { value }
    }

    /// Whether this node is an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, XmlNode::Element { .. })
    }

    /// Whether this node is text carrying only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, XmlNode::Text { value } if value.trim().is_empty())
    }

    fn count_elements(&self) -> usize {
        match self {
            XmlNode::Element { children, .. } => {
                1 + children.iter().map(XmlNode::count_elements).sum::<usize>()
            }
            XmlNode::Text { .. } => 0,
        }
    }

    fn count_attributes(&self) -> usize {
        match self {
            XmlNode::Element {
                attributes,
                children,
                ..
            } => {
                attributes.len()
                    + children
                        .iter()
                        .map(XmlNode::count_attributes)
                        .sum::<usize>()
            }
            XmlNode::Text { .. } => 0,
        }
    }

    fn depth(&self) -> usize {
        match self {
            XmlNode::Element { children, .. } => {
                1 + children.iter().map(XmlNode::depth).max().unwrap_or(0)
            }
            XmlNode::Text { .. } => 0,
        }
    }
}

impl XmlAttribute {
    /// Creates a new attribute with the given name and wire-form value.
    #[must_use]
    pub fn new(name: String, value: String) -> Self {
        XmlAttribute { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> XmlDocument {
        XmlDocument {
            declarations: String::new(),
            nodes: vec![XmlNode::Element {
                name: "root".to_string(),
                attributes: vec![XmlAttribute::new("id".to_string(), "1".to_string())],
                children: vec![
                    XmlNode::element("leaf".to_string()),
                    XmlNode::Element {
                        name: "branch".to_string(),
                        attributes: vec![XmlAttribute::new("k".to_string(), "v".to_string())],
                        children: vec![XmlNode::element("leaf".to_string())],
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_document_stats() {
        let doc = sample();
        assert_eq!(doc.root_name(), Some("root"));
        assert_eq!(doc.element_count(), 4);
        assert_eq!(doc.attribute_count(), 2);
        assert_eq!(doc.max_depth(), 3);
    }

    #[test]
    fn test_blank_detection() {
        assert!(XmlNode::text("  \n\t ".to_string()).is_blank());
        assert!(!XmlNode::text(" x ".to_string()).is_blank());
        assert!(!XmlNode::element("a".to_string()).is_blank());
    }
}
