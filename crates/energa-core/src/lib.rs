//! Core library for Energa electricity invoices.
//!
//! This crate provides:
//! - PDF line extraction with ASCII folding and marker windowing
//! - A section-aware parser turning statement lines into [`InvoiceRecord`]s
//! - Resolution of original invoices superseded by corrections
//! - CSV and JSON report output

pub mod error;
pub mod export;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{EnergaError, ExportError, ParseError, PdfError, Result};
pub use invoice::{
    resolve_duplicates, BatchOutcome, DocumentKind, EnergaInvoiceParser, ExtractionResult,
    InvoiceParser, Section,
};
pub use models::{EnergaConfig, InvoiceRecord};
pub use pdf::{LineSource, PdfLineSource};
