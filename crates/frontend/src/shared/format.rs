/// Display formatting for money, percentages and timestamps.
///
/// Everything renders with a fixed convention (EUR, dot decimal separator,
/// narrow no-break space as thousands separator) so tables and stat cards
/// agree across screens.
use chrono::{DateTime, Utc};
use contracts::shared::indicators::ValueFormat;

/// Format a value according to its indicator format.
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format!("{} {}", format_money(val), currency),
        ValueFormat::Number { decimals } => format!("{:.prec$}", val, prec = *decimals as usize),
        ValueFormat::Percent { decimals } => format!("{:.prec$}%", val, prec = *decimals as usize),
        ValueFormat::Integer => format_thousands(val as i64),
    }
}

/// Compact money form: millions get an `M` suffix, anything else two
/// decimals with thousands grouping.
pub fn format_money(val: f64) -> String {
    let abs = val.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", val / 1_000_000.0)
    } else {
        let int_part = val.trunc() as i64;
        let frac = ((abs - abs.trunc()) * 100.0).round() as i64;
        format!("{}.{:02}", format_thousands(int_part), frac)
    }
}

/// Group digits with a narrow no-break space.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// `2026-07-15 14:02` — list screens do not show seconds.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12_345), "12\u{00a0}345");
        assert_eq!(format_thousands(-1_234_567), "-1\u{00a0}234\u{00a0}567");
    }

    #[test]
    fn money_forms() {
        assert_eq!(format_money(1_500_000.0), "1.5M");
        assert_eq!(format_money(1234.5), "1\u{00a0}234.50");
        assert_eq!(format_money(0.0), "0.00");
    }

    #[test]
    fn value_formats() {
        assert_eq!(
            format_value(12.345, &ValueFormat::Percent { decimals: 1 }),
            "12.3%"
        );
        assert_eq!(format_value(1000.0, &ValueFormat::Integer), "1\u{a0}000");
        assert_eq!(
            format_value(10.0, &ValueFormat::Money { currency: "EUR".into() }),
            "10.00 EUR"
        );
    }

    #[test]
    fn datetime_without_seconds() {
        let dt = Utc.with_ymd_and_hms(2026, 7, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(dt), "2026-07-15 14:02");
        assert_eq!(format_date(dt), "2026-07-15");
    }
}
