//! Display formatting for money, dates, and times.
//!
//! Date and time values arrive as strings in a couple of shapes
//! depending on the backend serializer; every formatter falls back to
//! the raw input rather than failing a render.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// `1234.5` → `"$1,234.50"`.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let mut whole = (cents / 100).to_string();
    let fraction = cents % 100;
    let mut grouped = String::new();
    while whole.len() > 3 {
        let split = whole.len() - 3;
        grouped = format!(",{}{}", &whole[split..], grouped);
        whole.truncate(split);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}${whole}{grouped}.{fraction:02}")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc2822(raw) {
        return Some(stamp.date_naive());
    }
    None
}

/// `"2026-09-12"` → `"Saturday, September 12, 2026"`.
pub fn format_date_long(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"2026-09-12"` → `"Sep 12, 2026"`.
pub fn format_date_short(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"19:30:00"` → `"19:30"`.
pub fn format_time(raw: &str) -> String {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Timestamp (order dates) → `"Sep 12, 2026 19:30"`.
pub fn format_datetime(raw: &str) -> String {
    if let Ok(stamp) = DateTime::parse_from_rfc2822(raw) {
        return stamp.format("%b %-d, %Y %H:%M").to_string();
    }
    if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return stamp.format("%b %-d, %Y %H:%M").to_string();
    }
    format_date_short(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_group_thousands_and_pad_cents() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(7.5), "$7.50");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_price(-42.0), "-$42.00");
    }

    #[test]
    fn dates_render_in_both_lengths() {
        assert_eq!(format_date_long("2026-09-12"), "Saturday, September 12, 2026");
        assert_eq!(format_date_short("2026-09-12"), "Sep 12, 2026");
    }

    #[test]
    fn rfc2822_dates_are_understood() {
        assert_eq!(
            format_date_short("Sat, 12 Sep 2026 00:00:00 GMT"),
            "Sep 12, 2026"
        );
    }

    #[test]
    fn times_drop_seconds() {
        assert_eq!(format_time("19:30:00"), "19:30");
        assert_eq!(format_time("19:30"), "19:30");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_date_long("tba"), "tba");
        assert_eq!(format_time("doors open late"), "doors open late");
    }
}
