//! Record identity from the statement filename.

use std::path::Path;

use super::Result;
use crate::error::ParseError;
use crate::models::InvoiceRecord;

/// Marker of a correction document in the filename.
pub const CORRECTION_FILENAME_TAG: &str = "_KES_";

/// Kind of statement, told apart by filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Regular invoice (FES).
    Original,
    /// Correction invoice superseding an original (KES).
    Correction,
}

impl DocumentKind {
    pub fn of(filename: &str) -> Self {
        if filename.contains(CORRECTION_FILENAME_TAG) {
            Self::Correction
        } else {
            Self::Original
        }
    }
}

/// Identity of a statement: the third and fourth `_`-separated parts of
/// its filename, the extension dropped (`energa_faktura_FES_0042.pdf` ->
/// `FES_0042`).
pub fn invoice_id(filename: &str) -> Result<String> {
    let parts: Vec<&str> = filename.split('_').collect();
    if parts.len() < 4 {
        return Err(ParseError::Naming(filename.to_string()));
    }

    let stem = Path::new(parts[3])
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(parts[3]);

    Ok(format!("{}_{}", parts[2], stem))
}

/// Empty record for a statement file.
pub fn init_record(filename: &str) -> Result<InvoiceRecord> {
    invoice_id(filename).map(InvoiceRecord::new)
}
