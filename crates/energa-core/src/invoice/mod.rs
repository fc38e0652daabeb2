//! Energa statement parsing: section classification, field extraction,
//! reading parsing and duplicate resolution.

pub mod dedup;
pub mod extract;
pub mod identity;
mod parser;
pub mod reading;
pub mod rules;
pub mod sections;

pub use dedup::resolve_duplicates;
pub use identity::{init_record, invoice_id, DocumentKind};
pub use parser::{BatchOutcome, EnergaInvoiceParser, ExtractionResult, InvoiceParser};
pub use sections::Section;

use crate::error::ParseError;

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
