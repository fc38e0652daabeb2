//! Marker phrases of the Energa statement layout.
//!
//! All markers are matched as plain substrings against ASCII-folded lines,
//! so Polish letters without a decomposition (`ł`) are simply missing:
//! `Opłata` reads `Opata`.

// Section triggers, in priority order.
pub const SALES_SETTLEMENT: &str = "ROZLICZENIE SPRZEDAZY";
pub const DISTRIBUTION_SETTLEMENT: &str = "ROZLICZENIE DYSTRYBUCJI";
pub const ENERGY_SETTLEMENT: &str = "ROZLICZENIE ENERGII";

// Sales section.
pub const ACTIVE_ENERGY: &str = "Energia czynna";
pub const EXCISE: &str = "akcyza";

// Distribution section.
pub const FEE_SUBSCRIPTION: &str = "Opata abonamentowa";
pub const FEE_NETWORK_FIXED: &str = "Opata sieciowa staa";
pub const FEE_TRANSITIONAL: &str = "Opata przejsciowa";
pub const FEE_CAPACITY: &str = "Opata mocowa";
pub const FEE_NETWORK_VARIABLE: &str = "Opata sieciowa zmienna";
pub const FEE_QUALITY: &str = "Opata jakosciowa";
pub const FEE_RENEWABLE: &str = "Opata OZE";
pub const FEE_COGENERATION: &str = "Opata kogeneracyjna";

// Energy balance (deposit) section.
pub const NEGATIVE_BALANCES: &str = "Suma godzinowych sald ujemnych";
pub const POSITIVE_BALANCES: &str = "Suma godzinowych sald dodatnich";
pub const DRAWN_GROSS_SETTLEMENT: &str = "ROZLICZENIE SPRZEDAZY ENERGII POBRANEJ brutto";
pub const DEPOSIT_AFTER_SETTLEMENT: &str = "Depozyt energii po rozliczeniu";
pub const TOTAL: &str = "Razem";

// Reading section.
pub const FED_IN: &str = "oddanie";
