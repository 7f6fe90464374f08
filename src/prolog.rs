//! Declaration-block extraction
//!
//! The head of a document may carry an XML declaration, a DOCTYPE and a
//! leading comment, in that fixed order, each optional. They are split off
//! as one opaque block before parsing and re-attached verbatim on output.
//! This is a deliberate three-step prefix scan, not a general prolog
//! grammar: each kind is matched at most once, first match wins.

/// Split the leading declaration block from `raw`.
///
/// Returns the declaration block (newline-separated, trimmed, possibly
/// empty) and the remaining document content. Never fails: with no
/// declarations present the block is empty and the content is `raw`
/// minus a leading byte-order-mark and leading whitespace.
#[must_use]
pub fn split_prolog(raw: &str) -> (String, &str) {
    let mut rest = raw.trim_start_matches('\u{feff}').trim_start();
    let mut declarations = String::new();

    if let Some(decl) = leading_match(rest, "<?xml", "?>") {
        declarations.push_str(decl);
        declarations.push('\n');
        rest = rest[decl.len()..].trim_start();
    }

    if let Some(decl) = leading_match(rest, "<!DOCTYPE", ">") {
        declarations.push_str(decl);
        declarations.push('\n');
        rest = rest[decl.len()..].trim_start();
    }

    if let Some(decl) = leading_match(rest, "<!--", "-->") {
        declarations.push_str(decl);
        declarations.push('\n');
        rest = rest[decl.len()..].trim_start();
    }

    (declarations.trim().to_string(), rest)
}

/// Shortest `open ... close` match at the start of `s`, ASCII
/// case-insensitive on the opener.
fn leading_match<'a>(s: &'a str, open: &str, close: &str) -> Option<&'a str> {
    // Byte comparison: indexing by open.len() is only a char boundary
    // once the ASCII opener is known to match.
    if s.len() < open.len() || !s.as_bytes()[..open.len()].eq_ignore_ascii_case(open.as_bytes()) {
        return None;
    }
    let end = s[open.len()..].find(close)? + open.len() + close.len();
    Some(&s[..end])
}
