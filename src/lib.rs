//! # xmltidy
//!
//! Pretty-print, compact and validate textual XML documents.
//!
//! A document's leading declaration block (XML declaration, DOCTYPE,
//! leading comment) is carried through verbatim; the remaining content is
//! parsed into a tree, validated for well-formedness, and re-rendered
//! either indented or on a single line. Text node values, attribute
//! values and attribute order survive the round trip exactly.
//!
//! ## Quick Start
//!
//! ```
//! use xmltidy::prelude::*;
//!
//! let pretty = format_xml("<list><item>1</item></list>")?;
//! assert_eq!(pretty, "<list>\n    <item>1</item>\n</list>");
//!
//! let compact = compress_xml(&pretty)?;
//! assert_eq!(compact, "<list><item>1</item></list>");
//! # Ok::<(), xmltidy::Error>(())
//! ```
//!
//! ### Working with Files
//!
//! ```no_run
//! use xmltidy::prelude::*;
//!
//! format_file("config.xml", "config.pretty.xml")?;
//! # Ok::<(), xmltidy::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `xmltidy` command-line binary

pub mod converter;
pub mod document;
pub mod error;
pub mod prolog;
pub mod reader;
pub mod writer;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{compress_file, compress_xml, format_file, format_xml};
    pub use crate::document::{XmlAttribute, XmlDocument, XmlNode};
    pub use crate::error::{Error, Result};
    pub use crate::prolog::split_prolog;
    pub use crate::reader::{parse_xml, read_xml};
    pub use crate::writer::{serialize_compact, serialize_pretty};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
