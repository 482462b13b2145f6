//! Unified error types for Yuzu.
//!
//! Only boundary failures surface as errors: a missing input file, a document
//! part whose root element is not WordprocessingML, or malformed XML. A math
//! or document node with missing children is never an error — every
//! conversion rule substitutes a documented default and proceeds.
use thiserror::Error;

/// Main error type for Yuzu operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not exist
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// Input is present but not the expected document format
    #[error("Unsupported format: expected {expected}, got {got}")]
    UnsupportedFormat { expected: String, got: String },

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// Result type for Yuzu operations.
pub type Result<T> = std::result::Result<T, Error>;
