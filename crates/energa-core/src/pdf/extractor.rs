//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::normalize::{fold_ascii, marker_window};
use super::{LineSource, Result};
use crate::error::PdfError;
use crate::models::config::ExtractionConfig;

/// Line source reading the settlement block of an Energa PDF statement.
#[derive(Debug, Clone, Default)]
pub struct PdfLineSource {
    config: ExtractionConfig,
}

impl PdfLineSource {
    /// Create a line source with default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line source from configuration.
    pub fn from_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Load the PDF, decrypting documents protected by an empty password,
    /// and return bytes pdf-extract can read.
    fn load(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        if doc.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        Ok(raw)
    }

    /// Extract the full text of the document.
    pub fn extract_text(&self, data: &[u8]) -> Result<String> {
        let raw = self.load(data)?;
        pdf_extract::extract_text_from_mem(&raw).map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    /// Normalize extracted text and cut out the settlement block.
    pub fn select_lines(&self, text: &str, filename: &str) -> Vec<String> {
        let start = self.config.start_marker_for(filename);
        let folded: Vec<String> = text
            .lines()
            .map(|l| fold_ascii(l.trim()))
            .filter(|l| !l.is_empty())
            .collect();

        trace!("{} non-empty lines in {}", folded.len(), filename);
        marker_window(folded.iter().map(String::as_str), start, &self.config.end_marker)
    }
}

impl LineSource for PdfLineSource {
    fn lines(&self, data: &[u8], filename: &str) -> Result<Vec<String>> {
        let text = self.extract_text(data)?;
        let lines = self.select_lines(&text, filename);
        debug!("Selected {} lines from {}", lines.len(), filename);
        Ok(lines)
    }
}
