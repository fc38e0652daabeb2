//! Removal of original invoices superseded by corrections.

use std::collections::BTreeSet;

use tracing::info;

use crate::models::InvoiceRecord;

/// Drop every original (FES) record sharing its billing period with a
/// correction (KES) record. Periods compare as plain strings; the order of
/// the remaining records is kept.
pub fn resolve_duplicates(records: Vec<InvoiceRecord>) -> Vec<InvoiceRecord> {
    let mut superseded = BTreeSet::new();

    for correction in records.iter().filter(|r| r.is_correction()) {
        for (index, original) in records.iter().enumerate() {
            if original.is_original() && correction.same_period(original) {
                info!("Invoice {} superseded by correction {}", original.id, correction.id);
                superseded.insert(index);
            }
        }
    }

    records
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !superseded.contains(index))
        .map(|(_, record)| record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, start: &str, end: &str) -> InvoiceRecord {
        let mut record = InvoiceRecord::new(id);
        record.period_start = start.to_string();
        record.period_end = end.to_string();
        record
    }

    fn ids(records: &[InvoiceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_correction_supersedes_original() {
        let records = vec![
            record("FES_0001", "01.01.2024", "31.01.2024"),
            record("KES_0002", "01.01.2024", "31.01.2024"),
        ];
        assert_eq!(ids(&resolve_duplicates(records)), vec!["KES_0002"]);
    }

    #[test]
    fn test_different_periods_are_kept() {
        let records = vec![
            record("FES_0001", "01.01.2024", "31.01.2024"),
            record("KES_0002", "01.01.2024", "29.02.2024"),
        ];
        assert_eq!(ids(&resolve_duplicates(records)), vec!["FES_0001", "KES_0002"]);
    }

    #[test]
    fn test_original_marked_twice_is_removed_once() {
        let records = vec![
            record("KES_0001", "01.01.2024", "31.01.2024"),
            record("FES_0002", "01.01.2024", "31.01.2024"),
            record("KES_0003", "01.01.2024", "31.01.2024"),
            record("FES_0004", "01.02.2024", "29.02.2024"),
        ];
        assert_eq!(
            ids(&resolve_duplicates(records)),
            vec!["KES_0001", "KES_0003", "FES_0004"]
        );
    }

    #[test]
    fn test_originals_alone_are_kept() {
        let records = vec![
            record("FES_0001", "01.01.2024", "31.01.2024"),
            record("FES_0002", "01.01.2024", "31.01.2024"),
        ];
        assert_eq!(resolve_duplicates(records).len(), 2);
    }
}
