//! Charge and deposit extraction for the sales, distribution and balance
//! sections.

use tracing::trace;

use super::rules::patterns::*;
use super::rules::{parse_token, DISTRIBUTION_FEES};
use super::sections::Section;
use super::Result;
use crate::models::InvoiceRecord;

/// Latch for the "deposit after settlement" total.
///
/// The total row of the deposit table is the first `Razem` line after the
/// `Depozyt energii po rozliczeniu` header; earlier or later totals belong
/// to other tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepositTotal {
    #[default]
    Disarmed,
    Armed,
}

/// Per-document extractor state, fed one classified line at a time.
#[derive(Debug, Default)]
pub struct SectionExtractor {
    deposit_total: DepositTotal,
}

impl SectionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the rules of `section` to `line`.
    pub fn feed(&mut self, record: &mut InvoiceRecord, section: Section, line: &str) -> Result<()> {
        match section {
            Section::Reading => Ok(()),
            Section::Sales => extract_sales(record, line),
            Section::Distribution => extract_distribution(record, line),
            Section::Balance => self.extract_balance(record, line),
        }
    }

    fn extract_balance(&mut self, record: &mut InvoiceRecord, line: &str) -> Result<()> {
        if line.contains(NEGATIVE_BALANCES) {
            record.deposit_introduced += parse_token(line, -1)?;
        }

        if line.contains(DRAWN_GROSS_SETTLEMENT) {
            record.deposit_withdrawn += parse_token(line, -2)?;
        }

        if line.contains(DEPOSIT_AFTER_SETTLEMENT) {
            self.deposit_total = DepositTotal::Armed;
        }

        if line.contains(TOTAL) && self.deposit_total == DepositTotal::Armed {
            record.deposit_total += parse_token(line, -2)?;
            self.deposit_total = DepositTotal::Disarmed;
            trace!("Deposit total now {}", record.deposit_total);
        }

        Ok(())
    }
}

fn extract_sales(record: &mut InvoiceRecord, line: &str) -> Result<()> {
    if !line.contains(ACTIVE_ENERGY) {
        return Ok(());
    }

    let value = parse_token(line, -2)?;
    if line.contains(EXCISE) {
        record.sales_excise += value;
    } else {
        record.sales_energy += value;
    }
    Ok(())
}

fn extract_distribution(record: &mut InvoiceRecord, line: &str) -> Result<()> {
    for rule in &DISTRIBUTION_FEES {
        rule.apply(record, line)?;
    }
    Ok(())
}
