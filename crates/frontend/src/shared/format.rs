//! Number and date formatting for cards, axes and tooltips.
//!
//! Output does not depend on the browser locale: currency is always US
//! dollars with `,` thousands separators.

use chrono::NaiveDate;

/// Inserts `,` every three digits of a non-negative integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Integer with thousands separators, e.g. `1234567.0 -> "1,234,567"`.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-{}", group_thousands(&digits))
    } else {
        group_thousands(&digits)
    }
}

/// Whole-dollar amount, e.g. `1234.99 -> "$1,235"`, `-1500.0 -> "-$1,500"`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-${}", group_thousands(&digits))
    } else {
        format!("${}", group_thousands(&digits))
    }
}

/// Compact currency for axis ticks: `$950`, `$12.5K`, `$1.2M`.
pub fn format_currency_compact(value: f64) -> String {
    let abs = value.abs().round();
    let sign = if value < 0.0 { "-" } else { "" };
    // Switch unit where the smaller one would round up to 1000.
    if abs >= 999_950.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.1}K", sign, abs / 1_000.0)
    } else {
        format_currency(value)
    }
}

/// Percentage with one decimal, e.g. `12.345 -> "12.3%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Short axis label, e.g. `"2024-03-05" -> "Mar 5"`.
/// Unparseable input is returned unchanged.
pub fn format_short_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%b %-d").to_string(),
        None => date_str.to_string(),
    }
}

/// Long form used in tooltips, e.g. `"2024-03-05" -> "Mar 5, 2024"`.
pub fn format_long_date(date_str: &str) -> String {
    match parse_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.99), "$1,235");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-1500.0), "-$1,500");
        assert_eq!(format_currency(-0.2), "$0");
        assert_eq!(format_currency(f64::NAN), "$0");
    }

    #[test]
    fn test_format_currency_compact() {
        assert_eq!(format_currency_compact(950.0), "$950");
        assert_eq!(format_currency_compact(12_500.0), "$12.5K");
        assert_eq!(format_currency_compact(1_240_000.0), "$1.2M");
    }

    #[test]
    fn compact_currency_unit_follows_the_rounded_value() {
        assert_eq!(format_currency_compact(999.4), "$999");
        assert_eq!(format_currency_compact(999.6), "$1.0K");
        assert_eq!(format_currency_compact(-999.6), "-$1.0K");
        assert_eq!(format_currency_compact(999_949.0), "$999.9K");
        assert_eq!(format_currency_compact(999_999.0), "$1.0M");
        assert_eq!(format_currency_compact(f64::NAN), "$0");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-1234.0), "-1,234");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.345), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_short_date("2024-03-05"), "Mar 5");
        assert_eq!(format_short_date("2024-12-31T14:02:26Z"), "Dec 31");
        assert_eq!(format_long_date("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_short_date("week 12"), "week 12");
        assert_eq!(format_long_date(""), "");
    }
}
