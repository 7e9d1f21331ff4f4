use chrono::{DateTime, Local, NaiveDate};

use crate::model::change::ChangeRecord;

pub const DASH: &str = "—";

/// `1234567` -> `"1,234,567"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-dollar amount, `1234` -> `"$1,234"`.
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_count(amount))
}

/// `2024-01-05` -> `"Jan 5"`.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(s), Some(e)) => format!("{} {} {}", format_date_short(s), DASH, format_date_short(e)),
        _ => format!("{} {}", DASH, DASH),
    }
}

pub fn format_percent(percent: Option<u64>) -> String {
    match percent {
        Some(p) => format!("{}%", p),
        None => DASH.to_string(),
    }
}

/// `▲ 12%`, `▼ 4%`, or a dash without a baseline.
pub fn format_change(change: &ChangeRecord) -> String {
    match change.percent {
        Some(pct) => {
            let arrow = if change.improved { "▲" } else { "▼" };
            format!("{} {}%", arrow, pct.abs())
        }
        None => DASH.to_string(),
    }
}

pub fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_currency_and_dates() {
        assert_eq!(format_currency(12345), "$12,345");
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date_short(d), "Jan 5");
        let e = NaiveDate::from_ymd_opt(2024, 2, 11).unwrap();
        assert_eq!(format_date_range(Some(d), Some(e)), "Jan 5 — Feb 11");
        assert_eq!(format_date_range(None, None), "— —");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(&ChangeRecord { percent: Some(12), improved: true }), "▲ 12%");
        assert_eq!(format_change(&ChangeRecord { percent: Some(-4), improved: false }), "▼ 4%");
        assert_eq!(format_change(&ChangeRecord { percent: Some(0), improved: true }), "▲ 0%");
        assert_eq!(format_change(&ChangeRecord { percent: None, improved: true }), "—");
    }
}
