/// Utilities for date formatting
///
/// API dates arrive as `YYYY-MM-DD` or ISO datetimes.
use chrono::{NaiveDate, NaiveDateTime};

fn parse(date_str: &str) -> Option<NaiveDate> {
    let s = date_str.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// "2025-03-10" or "2025-03-10T08:15:00Z" -> "Mar 10, 2025"
pub fn format_date(date_str: &str) -> String {
    match parse(date_str) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Optional API date, "-" when absent
pub fn format_opt_date(date_str: Option<&str>) -> String {
    date_str
        .filter(|s| !s.trim().is_empty())
        .map(format_date)
        .unwrap_or_else(|| "-".to_string())
}

/// Today in `YYYY-MM-DD`, the value format of `<input type="date">`
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-03-10"), "Mar 10, 2025");
        assert_eq!(format_date("2024-12-01T14:02:26.123Z"), "Dec 1, 2024");
        assert_eq!(format_date("2024-12-01T14:02:26"), "Dec 1, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_opt_date(None), "-");
        assert_eq!(format_opt_date(Some(" ")), "-");
    }
}
