//! Report output: ordering, CSV and the JSON payload for the home
//! automation bus.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::error::ExportError;
use crate::models::InvoiceRecord;

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Day-first format of statement dates.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Billing period start as a date, if it parses.
pub fn period_start_date(record: &InvoiceRecord) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&record.period_start, DATE_FORMAT).ok()
}

/// Sort records chronologically by period start. Records whose start date
/// does not parse go last, in their original order.
pub fn sort_records(records: &mut [InvoiceRecord]) {
    records.sort_by_key(|r| match period_start_date(r) {
        Some(date) => (false, Some(date)),
        None => (true, None),
    });
}

/// Write records as CSV with a header row of column labels.
pub fn write_csv<W: Write>(writer: W, records: &[InvoiceRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    debug!("Wrote {} CSV rows", records.len());
    Ok(())
}

/// Records as a CSV string.
pub fn to_csv(records: &[InvoiceRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[derive(Serialize)]
struct Payload<'a> {
    data: &'a [InvoiceRecord],
}

/// Compact JSON payload `{"data":[...]}`.
pub fn to_payload(records: &[InvoiceRecord]) -> Result<String> {
    Ok(serde_json::to_string(&Payload { data: records })?)
}
