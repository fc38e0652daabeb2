//! Meter reading section: billing period, drawn and fed-in quantities and
//! hourly balances.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::rules::patterns::{FED_IN, NEGATIVE_BALANCES, POSITIVE_BALANCES};
use super::rules::{parse_int_token, parse_number, token_at};
use super::Result;
use crate::error::ParseError;
use crate::models::InvoiceRecord;

/// Which meter register the current reading lines describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadType {
    /// Energy drawn from the grid (pobranie).
    Drawn,
    /// Energy fed into the grid (oddanie).
    Fed,
}

/// Index of the first quantity token on a meter line.
const FIRST_QUANTITY: usize = 5;

/// Index of the balance value on a "Suma godzinowych sald" line.
const BALANCE_VALUE: isize = 6;

/// Parse the reading section lines into `record`.
///
/// Runs after the other sections were extracted, since the deposit unit
/// price needs the deposit value from the balance section.
pub fn parse_reading(record: &mut InvoiceRecord, lines: &[&str], meter_id: &str) -> Result<()> {
    let mut read_type = ReadType::Drawn;
    let mut meter_lines = 0usize;

    for line in lines {
        if line.contains(meter_id) {
            parse_meter_line(record, line, read_type)?;
            meter_lines += 1;
        }

        if line.contains(FED_IN) {
            read_type = ReadType::Fed;
        }

        if line.contains(POSITIVE_BALANCES) {
            record.drawn_balance = parse_balance(line)?;
        }

        if line.contains(NEGATIVE_BALANCES) {
            record.fed_balance = parse_balance(line)?;
        }
    }

    if meter_lines == 0 {
        warn!("No reading for meter {} in invoice {}", meter_id, record.id);
    }

    if record.fed_balance > 0 {
        record.deposit_unit_price =
            (record.deposit_introduced / Decimal::from(record.fed_balance)).round_dp(2);
    }

    if record.drawn_balance == 0 {
        record.drawn_balance = record.drawn_kwh.round().to_i64().unwrap_or_default();
    }

    debug!(
        "Reading for {}: {} - {}, drawn {} kWh, fed {} kWh",
        record.id, record.period_start, record.period_end, record.drawn_kwh, record.fed_kwh
    );

    Ok(())
}

/// Meter line layout: `<..> <..> <..> <from date> <to date> <from> <to> <kWh> ...`
/// where each quantity may have its thousands split into a separate token.
fn parse_meter_line(record: &mut InvoiceRecord, line: &str, read_type: ReadType) -> Result<()> {
    record.period_start = token_at(line, 3)?.to_string();
    record.period_end = token_at(line, 4)?.to_string();

    let mut index = FIRST_QUANTITY;
    let mut quantities = [Decimal::ZERO; 3];
    for quantity in &mut quantities {
        let (value, consumed) = parse_quantity(line, index)?;
        *quantity = value;
        index += consumed;
    }

    let [from, to, kwh] = quantities;
    match read_type {
        ReadType::Drawn => {
            record.drawn_from = from;
            record.drawn_to = to;
            record.drawn_kwh = kwh;
        }
        ReadType::Fed => {
            record.fed_from = from;
            record.fed_to = to;
            record.fed_kwh = kwh;
        }
    }
    Ok(())
}

/// Quantity starting at `index` and the number of tokens it spans.
///
/// A token with a decimal comma is a complete value. Without one it holds
/// the thousands, and the next token the remainder (`12 345,678`).
fn parse_quantity(line: &str, index: usize) -> Result<(Decimal, usize)> {
    let token = token_at(line, index as isize)?;
    if token.contains(',') {
        return Ok((parse_number(token, line)?, 1));
    }

    let next = token_at(line, index as isize + 1)?;
    let thousands = parse_number(token, line)?;
    let remainder = parse_number(next, line)?;
    let value = thousands
        .checked_mul(Decimal::ONE_THOUSAND)
        .and_then(|v| v.checked_add(remainder))
        .ok_or_else(|| out_of_range(&[token, next], line))?;
    Ok((value.round_dp(3), 2))
}

/// `1 234` split over two tokens, or a single `234`.
fn parse_balance(line: &str) -> Result<i64> {
    let value = parse_int_token(line, BALANCE_VALUE)?;
    if line.split_whitespace().nth(7).is_none() {
        return Ok(value);
    }

    let remainder = parse_int_token(line, BALANCE_VALUE + 1)?;
    value
        .checked_mul(1000)
        .and_then(|v| v.checked_add(remainder))
        .ok_or_else(|| {
            let tokens: Vec<&str> = line.split_whitespace().skip(6).take(2).collect();
            out_of_range(&tokens, line)
        })
}

/// A split number whose joined value does not fit.
fn out_of_range(tokens: &[&str], line: &str) -> ParseError {
    ParseError::InvalidNumber {
        token: tokens.join(" "),
        line: line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    const METER: &str = "30928304";

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parse(lines: &[&str]) -> InvoiceRecord {
        let mut record = InvoiceRecord::new("FES_1");
        parse_reading(&mut record, lines, METER).unwrap();
        record
    }

    #[test]
    fn test_meter_line_plain_decimals() {
        let record = parse(&["Licznik A 30928304 01.01.2024 31.01.2024 1,234 2,345 3,456"]);
        assert_eq!(record.period_start, "01.01.2024");
        assert_eq!(record.period_end, "31.01.2024");
        assert_eq!(record.drawn_from, dec("1.234"));
        assert_eq!(record.drawn_to, dec("2.345"));
        assert_eq!(record.drawn_kwh, dec("3.456"));
        assert_eq!(record.fed_kwh, Decimal::ZERO);
    }

    #[test]
    fn test_split_thousands_match_single_token() {
        let split = parse(&["A1 kWh 30928304 01.01.2024 31.01.2024 12 345,678 12 845,678 500,000"]);
        let joined = parse(&["A1 kWh 30928304 01.01.2024 31.01.2024 12345,678 12845,678 500,000"]);
        assert_eq!(split.drawn_from, dec("12345.678"));
        assert_eq!(split.drawn_from, joined.drawn_from);
        assert_eq!(split.drawn_to, joined.drawn_to);
        assert_eq!(split.drawn_kwh, joined.drawn_kwh);
    }

    #[test]
    fn test_fed_in_switch_is_one_way() {
        let record = parse(&[
            "pobranie X 30928304 01.01.2024 31.01.2024 100,000 250,000 150,000",
            "oddanie 2.8.0",
            "Y X 30928304 01.01.2024 31.01.2024 40,000 90,000 50,000",
            "pobranie",
        ]);
        assert_eq!(record.drawn_kwh, dec("150"));
        assert_eq!(record.fed_from, dec("40"));
        assert_eq!(record.fed_to, dec("90"));
        assert_eq!(record.fed_kwh, dec("50"));
    }

    #[test]
    fn test_meter_line_mentioning_fed_in_is_still_drawn() {
        let record = parse(&["oddanie X Y 01.02.2024 29.02.2024 1,000 2,000 1,000 30928304"]);
        assert_eq!(record.drawn_kwh, dec("1"));
        assert_eq!(record.fed_kwh, Decimal::ZERO);
    }

    #[test]
    fn test_balances_and_unit_price() {
        let mut record = InvoiceRecord::new("FES_1");
        record.deposit_introduced = dec("65.10");
        parse_reading(
            &mut record,
            &[
                "Suma godzinowych sald dodatnich kWh X 1 234",
                "Suma godzinowych sald ujemnych kWh X 210",
            ],
            METER,
        )
        .unwrap();

        assert_eq!(record.drawn_balance, 1234);
        assert_eq!(record.fed_balance, 210);
        assert_eq!(record.deposit_unit_price, dec("0.31"));
    }

    #[test]
    fn test_no_fed_balance_leaves_unit_price_zero() {
        let mut record = InvoiceRecord::new("FES_1");
        record.deposit_introduced = dec("65.10");
        parse_reading(&mut record, &[], METER).unwrap();
        assert_eq!(record.deposit_unit_price, Decimal::ZERO);
    }

    #[test]
    fn test_drawn_balance_defaults_to_rounded_kwh() {
        let record = parse(&["L A 30928304 01.01.2024 31.01.2024 1,000 151,600 150,600"]);
        assert_eq!(record.drawn_balance, 151);

        let record = parse(&["L A 30928304 01.01.2024 31.01.2024 1,000 151,500 150,500"]);
        // half-to-even
        assert_eq!(record.drawn_balance, 150);
    }

    #[test]
    fn test_missing_meter_line_keeps_defaults() {
        let record = parse(&["DANE ODCZYTOWE", "Numer licznika 11111111"]);
        assert_eq!(record.period_start, "");
        assert_eq!(record.drawn_kwh, Decimal::ZERO);
        assert_eq!(record.drawn_balance, 0);
    }

    #[test]
    fn test_truncated_meter_line_fails() {
        let mut record = InvoiceRecord::new("FES_1");
        let err = parse_reading(
            &mut record,
            &["L A 30928304 01.01.2024 31.01.2024 12 345,678"],
            METER,
        )
        .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_oversized_split_balance_is_format_error() {
        let line = "Suma godzinowych sald dodatnich kWh X 9223372036854775807 1";
        let mut record = InvoiceRecord::new("FES_1");
        let err = parse_reading(&mut record, &[line], METER).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                token: "9223372036854775807 1".to_string(),
                line: line.to_string(),
            }
        );
    }

    #[test]
    fn test_oversized_split_quantity_is_format_error() {
        let mut record = InvoiceRecord::new("FES_1");
        let err = parse_reading(
            &mut record,
            &["L A 30928304 01.01.2024 31.01.2024 79228162514264337593543950335 1,000 2,000 1,000"],
            METER,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { .. }));
    }
}
