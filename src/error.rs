//! Error types for `xmltidy`

use thiserror::Error;

/// The error type for `xmltidy` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input was empty or contained only whitespace.
    #[error("empty input: document contains no content")]
    EmptyInput,

    /// The content failed well-formedness validation.
    #[error("invalid XML format: {0}")]
    MalformedXml(String),
}

// Parser failures all surface as MalformedXml so callers see a single
// "invalid XML format" taxonomy regardless of which layer rejected the input.
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedXml(err.to_string())
    }
}

/// A specialized Result type for `xmltidy` operations.
pub type Result<T> = std::result::Result<T, Error>;
