//! Error types for the energa-core library.

use thiserror::Error;

/// Main error type for the energa library.
#[derive(Error, Debug)]
pub enum EnergaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading lines out of a PDF document.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while turning invoice lines into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No token at the requested position.
    #[error("no token at index {index} in line {line:?}")]
    MissingToken { index: isize, line: String },

    /// Token present but not numeric.
    #[error("token {token:?} in line {line:?} is not a number")]
    InvalidNumber { token: String, line: String },

    /// Filename does not follow the `prefix_prefix_<A>_<B>.<ext>` convention.
    #[error("filename {0:?} does not contain at least 4 '_'-separated parts")]
    Naming(String),
}

impl ParseError {
    /// Whether this is a numeric format failure rather than a naming one.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::MissingToken { .. } | Self::InvalidNumber { .. })
    }
}

/// Errors related to writing the tabular output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the energa library.
pub type Result<T> = std::result::Result<T, EnergaError>;
