//! Data models: the invoice record and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{EnergaConfig, ExportConfig, ExtractionConfig, ParserConfig};
pub use record::InvoiceRecord;
