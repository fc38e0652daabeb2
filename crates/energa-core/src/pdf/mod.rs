//! Statement line extraction from PDF documents.

mod extractor;
mod normalize;

pub use extractor::PdfLineSource;
pub use normalize::{fold_ascii, marker_window};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Source of the normalized text lines the invoice parser consumes.
pub trait LineSource {
    /// Lines of the statement's settlement block, ASCII-folded, in
    /// document order.
    fn lines(&self, data: &[u8], filename: &str) -> Result<Vec<String>>;
}
