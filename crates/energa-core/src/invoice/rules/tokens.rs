//! Locale-aware numeric tokens of a whitespace-split line.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ParseError;

/// Token at `index`, negative indices counting from the end (`-1` = last).
pub fn token_at(line: &str, index: isize) -> Result<&str, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let position = if index < 0 {
        tokens.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };

    position
        .and_then(|p| tokens.get(p).copied())
        .ok_or_else(|| ParseError::MissingToken {
            index,
            line: line.to_string(),
        })
}

/// Parse a number written with a decimal comma (`1234,56`).
pub fn parse_number(token: &str, line: &str) -> Result<Decimal, ParseError> {
    Decimal::from_str(&token.replace(',', ".")).map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        line: line.to_string(),
    })
}

/// Numeric value of the token at `index`.
pub fn parse_token(line: &str, index: isize) -> Result<Decimal, ParseError> {
    let token = token_at(line, index)?;
    parse_number(token, line)
}

/// Integer value of the token at `index`.
pub fn parse_int_token(line: &str, index: isize) -> Result<i64, ParseError> {
    let token = token_at(line, index)?;
    token.parse().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        line: line.to_string(),
    })
}
