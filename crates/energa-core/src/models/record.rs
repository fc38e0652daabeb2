//! Invoice record produced for every parsed Energa statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the report: readings, charges and deposit settlement of a
/// single invoice.
///
/// Serialized field names are the report column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Identity derived from the filename (`<A>_<B>`).
    #[serde(rename = "Faktura")]
    pub id: String,

    /// First day of the billing period (`DD.MM.YYYY`).
    #[serde(rename = "Data_od")]
    pub period_start: String,

    /// Last day of the billing period (`DD.MM.YYYY`).
    #[serde(rename = "Data_do")]
    pub period_end: String,

    #[serde(rename = "pobranie_od")]
    pub drawn_from: Decimal,
    #[serde(rename = "pobranie_do")]
    pub drawn_to: Decimal,
    #[serde(rename = "pobranie_kWh")]
    pub drawn_kwh: Decimal,
    /// Sum of hourly positive balances, falls back to rounded `drawn_kwh`.
    #[serde(rename = "pobranie_saldo")]
    pub drawn_balance: i64,

    #[serde(rename = "oddanie_od")]
    pub fed_from: Decimal,
    #[serde(rename = "oddanie_do")]
    pub fed_to: Decimal,
    #[serde(rename = "oddanie_kWh")]
    pub fed_kwh: Decimal,
    /// Sum of hourly negative balances.
    #[serde(rename = "oddanie_saldo")]
    pub fed_balance: i64,

    #[serde(rename = "sprzedaz")]
    pub sales_energy: Decimal,
    #[serde(rename = "sprzedaz_akcyza")]
    pub sales_excise: Decimal,

    #[serde(rename = "dystrybucja_abonamentowa")]
    pub distribution_subscription: Decimal,
    #[serde(rename = "dystrybucja_sieciowa_stala")]
    pub distribution_network_fixed: Decimal,
    #[serde(rename = "dystrybucja_przejsciowa")]
    pub distribution_transitional: Decimal,
    #[serde(rename = "dystrybucja_mocowa")]
    pub distribution_capacity: Decimal,
    #[serde(rename = "dystrybucja_sieciowa_zmienna")]
    pub distribution_network_variable: Decimal,
    #[serde(rename = "dystrybucja_jakosciowa")]
    pub distribution_quality: Decimal,
    #[serde(rename = "dystrybucja_OZE")]
    pub distribution_renewable: Decimal,
    #[serde(rename = "dystrybucja_kogeneracyjna")]
    pub distribution_cogeneration: Decimal,

    /// Value of energy fed into the deposit.
    #[serde(rename = "depozyt_wprowadzono")]
    pub deposit_introduced: Decimal,
    /// `deposit_introduced / fed_balance`, zero when nothing was fed in.
    #[serde(rename = "depozyt_wprowadzenie_cena")]
    pub deposit_unit_price: Decimal,
    #[serde(rename = "depozyt_pobrano")]
    pub deposit_withdrawn: Decimal,
    #[serde(rename = "depozyt_razem")]
    pub deposit_total: Decimal,
}

impl InvoiceRecord {
    /// Create an empty record with every accumulator at zero.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            period_start: String::new(),
            period_end: String::new(),
            drawn_from: Decimal::ZERO,
            drawn_to: Decimal::ZERO,
            drawn_kwh: Decimal::ZERO,
            drawn_balance: 0,
            fed_from: Decimal::ZERO,
            fed_to: Decimal::ZERO,
            fed_kwh: Decimal::ZERO,
            fed_balance: 0,
            sales_energy: Decimal::ZERO,
            sales_excise: Decimal::ZERO,
            distribution_subscription: Decimal::ZERO,
            distribution_network_fixed: Decimal::ZERO,
            distribution_transitional: Decimal::ZERO,
            distribution_capacity: Decimal::ZERO,
            distribution_network_variable: Decimal::ZERO,
            distribution_quality: Decimal::ZERO,
            distribution_renewable: Decimal::ZERO,
            distribution_cogeneration: Decimal::ZERO,
            deposit_introduced: Decimal::ZERO,
            deposit_unit_price: Decimal::ZERO,
            deposit_withdrawn: Decimal::ZERO,
            deposit_total: Decimal::ZERO,
        }
    }

    /// Whether this record comes from a correction invoice.
    pub fn is_correction(&self) -> bool {
        self.id.contains(CORRECTION_TAG)
    }

    /// Whether this record comes from an original invoice.
    pub fn is_original(&self) -> bool {
        self.id.contains(ORIGINAL_TAG)
    }

    /// Whether both records cover the same billing period.
    pub fn same_period(&self, other: &Self) -> bool {
        self.period_start == other.period_start && self.period_end == other.period_end
    }

    /// Sum of all distribution fees.
    pub fn distribution_total(&self) -> Decimal {
        self.distribution_subscription
            + self.distribution_network_fixed
            + self.distribution_transitional
            + self.distribution_capacity
            + self.distribution_network_variable
            + self.distribution_quality
            + self.distribution_renewable
            + self.distribution_cogeneration
    }
}

/// Marker of a correction invoice in the record id (faktura korygujaca).
pub const CORRECTION_TAG: &str = "KES";

/// Marker of an original invoice in the record id.
pub const ORIGINAL_TAG: &str = "FES";
