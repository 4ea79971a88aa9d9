//! Text formatting for report values.
//!
//! Currency is always rendered with two decimals and comma thousands
//! separators, negative amounts as `-$1,234.50`. Infinite values render with
//! the `∞` sign instead of a number.

pub const INFINITY_SIGN: &str = "∞";

pub fn format_currency(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}${INFINITY_SIGN}");
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // -0.00 after rounding is still zero
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&digits))
}

/// Formats a percentage with `decimals` digits, e.g. `1700.0%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{INFINITY_SIGN}%");
    }
    format!("{value:.decimals$}%")
}

/// Formats a rate as given by the user, e.g. `0.5%` or `1.0%`.
pub fn format_rate(value: f64) -> String {
    // Debug keeps the trailing `.0` on whole numbers
    format!("{value:?}%")
}

pub fn format_months(value: f64) -> String {
    if value.is_infinite() {
        return format!("{INFINITY_SIGN} months");
    }
    format!("{value:.1} months")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
