//! Configuration structures for the invoice pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::invoice::DocumentKind;

/// Main configuration for the energa pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergaConfig {
    /// Invoice parsing configuration.
    pub parser: ParserConfig,

    /// PDF line extraction configuration.
    pub extraction: ExtractionConfig,

    /// Report output configuration.
    pub export: ExportConfig,
}

/// Invoice parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Meter number whose reading lines carry the billing period and
    /// the from/to/kWh quantities.
    pub meter_id: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            meter_id: "30928304".to_string(),
        }
    }
}

/// PDF line extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Marker opening the parsed block of an original invoice.
    pub start_marker: String,

    /// Marker opening the parsed block of a correction invoice.
    pub correction_start_marker: String,

    /// Marker closing the parsed block.
    pub end_marker: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            start_marker: "DANE ODCZYTOWE".to_string(),
            correction_start_marker: "WINNO BYC".to_string(),
            end_marker: "ROZLICZENIE VAT".to_string(),
        }
    }
}

impl ExtractionConfig {
    /// Start marker for a document, chosen by its filename.
    pub fn start_marker_for(&self, filename: &str) -> &str {
        match DocumentKind::of(filename) {
            DocumentKind::Correction => &self.correction_start_marker,
            DocumentKind::Original => &self.start_marker,
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default CSV report path.
    pub csv_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("energa_output.csv"),
        }
    }
}

impl EnergaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_marker_by_filename() {
        let config = ExtractionConfig::default();
        assert_eq!(
            config.start_marker_for("bill_invoice_2024-01_2024-02.pdf"),
            "DANE ODCZYTOWE"
        );
        assert_eq!(
            config.start_marker_for("energa_faktura_KES_0012.pdf"),
            "WINNO BYC"
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EnergaConfig =
            serde_json::from_str(r#"{"parser": {"meter_id": "123"}}"#).unwrap();
        assert_eq!(config.parser.meter_id, "123");
        assert_eq!(config.extraction.end_marker, "ROZLICZENIE VAT");
        assert_eq!(config.export.csv_path, PathBuf::from("energa_output.csv"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = EnergaConfig::default();
        config.parser.meter_id = "99999999".to_string();
        config.save(&path).unwrap();

        let loaded = EnergaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.parser.meter_id, "99999999");
        assert_eq!(loaded.extraction.correction_start_marker, "WINNO BYC");
    }
}
