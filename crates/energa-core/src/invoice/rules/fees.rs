//! Keyword-triggered accumulation of distribution fees.

use rust_decimal::Decimal;

use super::patterns::*;
use super::tokens::parse_token;
use crate::error::ParseError;
use crate::models::InvoiceRecord;

/// Accessor of the record field a fee accumulates into.
pub type FeeField = fn(&mut InvoiceRecord) -> &mut Decimal;

/// A fee line: the keyword that triggers it and the field it feeds.
#[derive(Clone, Copy)]
pub struct FeeRule {
    pub keyword: &'static str,
    pub field: FeeField,
}

/// Distribution fees, one rule per fee column.
pub const DISTRIBUTION_FEES: [FeeRule; 8] = [
    FeeRule { keyword: FEE_SUBSCRIPTION, field: |r| &mut r.distribution_subscription },
    FeeRule { keyword: FEE_NETWORK_FIXED, field: |r| &mut r.distribution_network_fixed },
    FeeRule { keyword: FEE_TRANSITIONAL, field: |r| &mut r.distribution_transitional },
    FeeRule { keyword: FEE_CAPACITY, field: |r| &mut r.distribution_capacity },
    FeeRule { keyword: FEE_NETWORK_VARIABLE, field: |r| &mut r.distribution_network_variable },
    FeeRule { keyword: FEE_QUALITY, field: |r| &mut r.distribution_quality },
    FeeRule { keyword: FEE_RENEWABLE, field: |r| &mut r.distribution_renewable },
    FeeRule { keyword: FEE_COGENERATION, field: |r| &mut r.distribution_cogeneration },
];

/// Add the second-to-last token of `line` to `field` when `keyword` occurs
/// in the line, keeping the field at two decimal places.
pub fn accumulate_fee(field: &mut Decimal, line: &str, keyword: &str) -> Result<bool, ParseError> {
    if !line.contains(keyword) {
        return Ok(false);
    }

    let value = parse_token(line, -2)?;
    *field = (*field + value).round_dp(2);
    Ok(true)
}

impl FeeRule {
    /// Apply this rule to a line of the distribution section.
    pub fn apply(&self, record: &mut InvoiceRecord, line: &str) -> Result<bool, ParseError> {
        accumulate_fee((self.field)(record), line, self.keyword)
    }
}
