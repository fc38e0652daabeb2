//! Line-level extraction rules for Energa statements.

pub mod fees;
pub mod patterns;
pub mod tokens;

pub use fees::{accumulate_fee, FeeRule, DISTRIBUTION_FEES};
pub use patterns::*;
pub use tokens::{parse_int_token, parse_number, parse_token, token_at};
