//! Number formatting shared by the dashboard, the terminal, and the report.
//!
//! All grouping uses the `en` locale so the browser, the CLI, and the
//! downloaded report print identical figures.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use num_format::{Locale, ToFormattedString};

/// `1234` → `"1,234"`.
#[must_use]
pub fn grouped(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// `1234` → `"$1,234"`; negatives keep the sign after the currency symbol.
#[must_use]
pub fn dollars(value: i64) -> String {
    format!("${}", value.to_formatted_string(&Locale::en))
}

/// Monthly revenue in thousands with one decimal: `2500` → `"$2.5k"`.
///
/// Ties round up, matching the dashboard read-out.
#[must_use]
pub fn thousands_k(value: u64) -> String {
    let tenths = (value + 50) / 100;
    format!("${}.{}k", tenths / 10, tenths % 10)
}

/// Rate with one decimal: `2.5` → `"2.5%"`.
#[must_use]
pub fn percent_1(value: f64) -> String {
    let rounded = (value * 10.0 + 0.5).floor() / 10.0;
    format!("{rounded:.1}%")
}

/// Rate in its shortest form: `2.0` → `"2%"`, `2.5` → `"2.5%"`.
#[must_use]
pub fn percent_short(value: f64) -> String {
    format!("{value}%")
}
