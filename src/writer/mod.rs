//! Document rendering
//!
//! Two rendering policies over the same tree: `pretty` re-indents with
//! a four-space unit, `compact` strips all formatting whitespace. Both
//! emit stored text and attribute values verbatim, so a parse/serialize
//! round trip never re-escapes content or normalizes character
//! references. (`quick_xml::Writer` is deliberately not used here: it
//! escapes attribute and text content on write, which would double-escape
//! values that are stored in wire form.)

mod compact;
mod pretty;

pub use compact::serialize_compact;
pub use pretty::serialize_pretty;

use crate::document::{XmlAttribute, XmlNode};
use std::borrow::Cow;

/// Children that carry content: whitespace-only text nodes are
/// formatting noise from the source layout and are dropped.
pub(crate) fn content_children(children: &[XmlNode]) -> Vec<&XmlNode> {
    children.iter().filter(|child| !child.is_blank()).collect()
}

/// Emit `<name a="v" ...>`. Values are written verbatim between double
/// quotes, in source order.
pub(crate) fn write_open_tag(out: &mut String, name: &str, attributes: &[XmlAttribute]) {
    out.push('<');
    out.push_str(name);
    for attr in attributes {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attr_quotes(&attr.value));
        out.push('"');
    }
    out.push('>');
}

/// Escape only what the double-quoted form requires. A literal `"` can
/// reach us from a single-quoted source attribute; everything else in a
/// wire-form value is already valid between double quotes.
fn escape_attr_quotes(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Emit `</name>`.
pub(crate) fn write_close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Prepend the declaration block, when present, on its own line(s).
pub(crate) fn with_declarations(declarations: &str, body: &str) -> String {
    if declarations.is_empty() {
        body.to_string()
    } else {
        format!("{declarations}\n{body}")
    }
}
