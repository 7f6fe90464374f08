//! XML parsing and well-formedness validation
//!
//! `quick-xml` drives tokenization and is the well-formedness oracle for
//! everything it checks itself (tag syntax, end-tag matching, attribute
//! syntax, entity references). The reader builds the node tree on top of
//! that and layers the structural checks a conformant parser performs
//! that the tokenizer alone does not: name syntax and root-level shape.
//!
//! Parsing is atomic. Any rejection surfaces as [`Error::MalformedXml`]
//! and no partial tree escapes.

use crate::document::{XmlAttribute, XmlDocument, XmlNode};
use crate::error::{Error, Result};
use crate::prolog::split_prolog;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

/// Read and parse an XML file from disk.
///
/// # Errors
/// Returns an error if the file cannot be read or is not well-formed XML.
pub fn read_xml<P: AsRef<Path>>(path: P) -> Result<XmlDocument> {
    let content = fs::read_to_string(path)?;
    parse_xml(&content)
}

/// Parse a raw XML string, declaration block included.
///
/// The leading declaration block is split off verbatim; the remaining
/// content must hold exactly one root element.
///
/// # Errors
/// Returns [`Error::EmptyInput`] for empty or whitespace-only input and
/// [`Error::MalformedXml`] when the content is not well-formed.
pub fn parse_xml(input: &str) -> Result<XmlDocument> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let (declarations, content) = split_prolog(input);
    let nodes = parse_content(content)?;

    Ok(XmlDocument {
        declarations,
        nodes,
    })
}

fn parse_content(content: &str) -> Result<Vec<XmlNode>> {
    let mut reader = Reader::from_str(content);
    let mut top_level: Vec<XmlNode> = Vec::new();
    // Elements whose closing tag has not been seen yet.
    let mut stack: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach(&mut stack, &mut top_level, element);
            }
            Ok(Event::End(_)) => {
                // Name matching against the opening tag is enforced by
                // quick-xml before the event reaches us.
                let completed = stack.pop().ok_or_else(|| {
                    Error::MalformedXml("closing tag without matching opening tag".to_string())
                })?;
                attach(&mut stack, &mut top_level, completed);
            }
            Ok(Event::Text(e)) => {
                // Validate entity references, then keep the wire form so
                // rendering reproduces the input byte-for-byte.
                e.unescape()?;
                let value = String::from_utf8_lossy(&e).into_owned();
                if let Some(XmlNode::Element { children, .. }) = stack.last_mut() {
                    children.push(XmlNode::Text { value });
                } else if !value.trim().is_empty() {
                    return Err(Error::MalformedXml(
                        "text outside of root element".to_string(),
                    ));
                }
            }
            Ok(Event::CData(e)) => {
                let value = format!("<![CDATA[{}]]>", String::from_utf8_lossy(&e));
                if let Some(XmlNode::Element { children, .. }) = stack.last_mut() {
                    children.push(XmlNode::Text { value });
                } else {
                    return Err(Error::MalformedXml(
                        "CDATA section outside of root element".to_string(),
                    ));
                }
            }
            Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {
                // Structural noise the renderers ignore. Leading
                // declarations were already captured by the prolog split.
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(XmlNode::Element { name, .. }) = stack.last() {
        return Err(Error::MalformedXml(format!("unclosed tag <{name}>")));
    }

    match top_level.len() {
        0 => Err(Error::MalformedXml("no root element found".to_string())),
        1 => Ok(top_level),
        _ => Err(Error::MalformedXml("multiple root elements".to_string())),
    }
}

/// Hand a completed node to the innermost open element, or to the top
/// level when no element is open.
fn attach(stack: &mut [XmlNode], top_level: &mut Vec<XmlNode>, node: XmlNode) {
    if let Some(XmlNode::Element { children, .. }) = stack.last_mut() {
        children.push(node);
    } else {
        top_level.push(node);
    }
}

fn element_from_start(e: &BytesStart<'_>) -> Result<XmlNode> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    validate_name(&name)?;

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        // Attribute syntax and duplicate names are checked by the iterator.
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        validate_name(&key)?;
        // Entity validation only; the stored value stays in wire form.
        attr.unescape_value()?;
        attributes.push(XmlAttribute::new(
            key,
            String::from_utf8_lossy(&attr.value).into_owned(),
        ));
    }

    Ok(XmlNode::Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Element and attribute names follow the XML Name shape: a letter,
/// underscore or colon first, then letters, digits, `-`, `.`, `_`, `:`.
/// quick-xml tokenizes lenient names like `<1a>` without complaint, so
/// this check is what rejects them.
fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_' || first == ':')
                && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::MalformedXml(format!(
            "invalid character in name {name:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_tree() {
        let doc = parse_xml("<r><a k=\"v\">hi</a></r>").unwrap();
        assert_eq!(doc.root_name(), Some("r"));
        assert_eq!(doc.element_count(), 2);
        assert_eq!(doc.attribute_count(), 1);
    }

    #[test]
    fn test_attribute_order_is_source_order() {
        let doc = parse_xml(r#"<a z="1" a="2"></a>"#).unwrap();
        let Some(XmlNode::Element { attributes, .. }) = doc.root() else {
            panic!("expected root element");
        };
        assert_eq!(attributes[0].name, "z");
        assert_eq!(attributes[1].name, "a");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(parse_xml(""), Err(Error::EmptyInput)));
        assert!(matches!(parse_xml("  \n\t "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_mismatched_closing_tag_is_rejected() {
        assert!(matches!(
            parse_xml("<a><b></a>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_unclosed_tag_is_rejected() {
        assert!(matches!(
            parse_xml("<a><b></b>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_multiple_roots_are_rejected() {
        assert!(matches!(
            parse_xml("<a></a><b></b>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        assert!(matches!(
            parse_xml("<1bad></1bad>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_duplicate_attributes_are_rejected() {
        assert!(matches!(
            parse_xml(r#"<a k="1" k="2"></a>"#),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_bare_ampersand_is_rejected() {
        assert!(matches!(
            parse_xml("<a>this & that</a>"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_text_outside_root_is_rejected() {
        assert!(matches!(
            parse_xml("<a></a>junk"),
            Err(Error::MalformedXml(_))
        ));
    }

    #[test]
    fn test_whitespace_around_root_is_ignored() {
        let doc = parse_xml("\n  <a></a>\n").unwrap();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.declarations.is_empty());
    }

    #[test]
    fn test_namespace_prefixes_pass_through() {
        let doc = parse_xml(r#"<ns:r xmlns:ns="urn:x"><ns:a>1</ns:a></ns:r>"#).unwrap();
        assert_eq!(doc.root_name(), Some("ns:r"));
    }

    #[test]
    fn test_entities_are_kept_in_wire_form() {
        let doc = parse_xml("<a>x &amp; y</a>").unwrap();
        let Some(XmlNode::Element { children, .. }) = doc.root() else {
            panic!("expected root element");
        };
        assert_eq!(
            children[0],
            XmlNode::Text {
                value: "x &amp; y".to_string()
            }
        );
    }
}
