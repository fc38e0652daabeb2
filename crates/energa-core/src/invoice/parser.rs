//! Assembly of one invoice record per statement.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::ParseError;
use crate::models::config::ParserConfig;
use crate::models::InvoiceRecord;

use super::extract::SectionExtractor;
use super::identity::init_record;
use super::reading::parse_reading;
use super::sections::{classify, Section, Sections};
use super::{resolve_duplicates, Result};

/// Result of parsing one statement.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Parsed record.
    pub record: InvoiceRecord,
    /// Number of lines classified into each section.
    pub line_counts: BTreeMap<Section, usize>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Records of a batch after duplicate resolution, plus the documents that
/// failed to parse.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<InvoiceRecord>,
    pub failures: Vec<(String, ParseError)>,
}

/// Trait for statement parsing.
pub trait InvoiceParser {
    /// Parse the extracted lines of the statement stored as `filename`.
    fn parse(&self, filename: &str, lines: &[String]) -> Result<ExtractionResult>;

    /// Parse statements and resolve duplicates across them.
    ///
    /// A failing document is reported in [`BatchOutcome::failures`] and does
    /// not stop the rest of the batch.
    fn parse_batch<'a, I>(&self, documents: I) -> BatchOutcome
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut outcome = BatchOutcome::default();

        for (filename, lines) in documents {
            match self.parse(filename, lines) {
                Ok(result) => outcome.records.push(result.record),
                Err(e) => {
                    warn!("Failed to parse {}: {}", filename, e);
                    outcome.failures.push((filename.to_string(), e));
                }
            }
        }

        outcome.records = resolve_duplicates(outcome.records);
        outcome
    }
}

/// Parser for the Energa statement layout.
#[derive(Debug, Clone)]
pub struct EnergaInvoiceParser {
    /// Meter whose reading line carries period and quantities.
    meter_id: String,
}

impl EnergaInvoiceParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            meter_id: config.meter_id.clone(),
        }
    }

    /// Set the meter identifier.
    pub fn with_meter_id(mut self, meter_id: impl Into<String>) -> Self {
        self.meter_id = meter_id.into();
        self
    }

    pub fn meter_id(&self) -> &str {
        &self.meter_id
    }
}

impl Default for EnergaInvoiceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for EnergaInvoiceParser {
    fn parse(&self, filename: &str, lines: &[String]) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut record = init_record(filename)?;

        info!("Parsing invoice {} from {} lines", record.id, lines.len());

        let mut sections = Sections::default();
        let mut extractor = SectionExtractor::new();
        for (section, line) in classify(lines.iter().map(String::as_str)) {
            extractor.feed(&mut record, section, line)?;
            sections.push(section, line);
        }

        parse_reading(&mut record, sections.lines(Section::Reading), &self.meter_id)?;

        let line_counts = [Section::Reading, Section::Sales, Section::Distribution, Section::Balance]
            .into_iter()
            .map(|s| (s, sections.lines(s).len()))
            .collect();

        debug!(
            "Parsed invoice {}: sales {}, distribution {}, deposit total {}",
            record.id,
            record.sales_energy,
            record.distribution_total(),
            record.deposit_total
        );

        Ok(ExtractionResult {
            record,
            line_counts,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }

    const STATEMENT: &str = r#"
        DANE ODCZYTOWE
        Licznik 30928304 Strefa 01.01.2024 31.01.2024 12 345,678 12 645,678 300,000
        Suma godzinowych sald dodatnich kWh - 1 280
        energia oddanie
        Licznik 30928304 Strefa 01.01.2024 31.01.2024 2 000,500 2 210,500 210,000
        Suma godzinowych sald ujemnych kWh - 1 210
        ROZLICZENIE SPRZEDAZY ENERGII
        Energia czynna calodobowa kWh 280 0,5050 141,40 23
        Energia czynna akcyza kWh 280 0,0050 1,40 23
        ROZLICZENIE DYSTRYBUCJI ENERGII
        Opata abonamentowa zl/mc 1 0,75 0,75 23
        Opata sieciowa staa zl/mc 1 11,10 11,10 23
        Opata przejsciowa zl/mc 1 0,33 0,33 23
        Opata mocowa zl/mc 1 5,56 5,56 23
        Opata sieciowa zmienna kWh 280 0,2866 80,25 23
        Opata jakosciowa kWh 280 0,0314 8,79 23
        Opata OZE kWh 280 0,0035 0,98 23
        Opata kogeneracyjna kWh 280 0,0062 1,74 23
        ROZLICZENIE ENERGII ELEKTRYCZNEJ
        Suma godzinowych sald ujemnych kWh 210 0,3100 65,10
        ROZLICZENIE SPRZEDAZY ENERGII POBRANEJ brutto 173,92 23
        Depozyt energii po rozliczeniu
        Razem 0,00 0
    "#;

    #[test]
    fn test_parse_full_statement() {
        let parser = EnergaInvoiceParser::new();
        let result = parser
            .parse("energa_faktura_FES_0001.pdf", &lines(STATEMENT))
            .unwrap();
        let record = result.record;

        assert_eq!(record.id, "FES_0001");
        assert_eq!(record.period_start, "01.01.2024");
        assert_eq!(record.period_end, "31.01.2024");
        assert_eq!(record.drawn_from, dec("12345.678"));
        assert_eq!(record.drawn_to, dec("12645.678"));
        assert_eq!(record.drawn_kwh, dec("300"));
        assert_eq!(record.drawn_balance, 1280);
        assert_eq!(record.fed_from, dec("2000.5"));
        assert_eq!(record.fed_kwh, dec("210"));
        assert_eq!(record.fed_balance, 1210);
        assert_eq!(record.sales_energy, dec("141.40"));
        assert_eq!(record.sales_excise, dec("1.40"));
        assert_eq!(record.distribution_total(), dec("109.50"));
        assert_eq!(record.deposit_introduced, dec("65.10"));
        assert_eq!(record.deposit_withdrawn, dec("173.92"));
        assert_eq!(record.deposit_total, dec("0"));
        assert_eq!(record.deposit_unit_price, dec("0.05"));

        assert_eq!(result.line_counts[&Section::Reading], 6);
        assert_eq!(result.line_counts[&Section::Sales], 3);
        assert_eq!(result.line_counts[&Section::Distribution], 9);
        assert_eq!(result.line_counts[&Section::Balance], 5);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = EnergaInvoiceParser::new();
        let lines = lines(STATEMENT);
        let first = parser.parse("energa_faktura_FES_0001.pdf", &lines).unwrap();
        let second = parser.parse("energa_faktura_FES_0001.pdf", &lines).unwrap();
        assert_eq!(first.record, second.record);
    }

    #[test]
    fn test_naming_error_before_parsing() {
        let parser = EnergaInvoiceParser::new();
        let err = parser.parse("faktura.pdf", &lines(STATEMENT)).unwrap_err();
        assert_eq!(err, ParseError::Naming("faktura.pdf".to_string()));
    }

    #[test]
    fn test_format_error_aborts_document() {
        let parser = EnergaInvoiceParser::new();
        let lines = lines("ROZLICZENIE DYSTRYBUCJI\nOpata OZE");
        let err = parser.parse("energa_faktura_FES_0001.pdf", &lines).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_custom_meter_id() {
        let parser = EnergaInvoiceParser::new().with_meter_id("11111111");
        let lines = lines("N S 11111111 01.03.2024 31.03.2024 1,000 3,000 2,000");
        let record = parser.parse("a_b_FES_3.pdf", &lines).unwrap().record;
        assert_eq!(record.period_start, "01.03.2024");
        assert_eq!(record.drawn_kwh, dec("2"));
        assert_eq!(record.drawn_balance, 2);
    }

    #[test]
    fn test_parse_batch_dedups_and_reports_failures() {
        let parser = EnergaInvoiceParser::new();
        let statement = lines(STATEMENT);
        let broken = lines("ROZLICZENIE SPRZEDAZY\nEnergia czynna");
        let documents = [
            ("energa_faktura_FES_0001.pdf", statement.as_slice()),
            ("energa_faktura_KES_0002.pdf", statement.as_slice()),
            ("energa_faktura_FES_0003.pdf", broken.as_slice()),
            ("broken.pdf", statement.as_slice()),
        ];

        let outcome = parser.parse_batch(documents);

        let ids: Vec<_> = outcome.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["KES_0002"]);
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].0, "energa_faktura_FES_0003.pdf");
        assert_eq!(outcome.failures[1].1, ParseError::Naming("broken.pdf".to_string()));
    }
}
