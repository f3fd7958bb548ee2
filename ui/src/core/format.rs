//! Formatting helpers for presenting scores and report dates.

use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// Calendar date layout used for report timestamps (`MM/DD/YYYY`).
pub const REPORT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month]/[day]/[year]");

/// Unpadded US layout written by spreadsheet tools (`M/D/YYYY`).
pub const SHORT_US_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month padding:none]/[day padding:none]/[year]");

/// ISO calendar date layout accepted on import (`YYYY-MM-DD`).
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn format_date(date: Date) -> String {
    date.format(REPORT_DATE)
        .unwrap_or_else(|_| date.to_string())
}

/// Parse a calendar date in the report layout, its unpadded form, or ISO layout.
pub fn parse_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Date::parse(trimmed, REPORT_DATE)
        .or_else(|_| Date::parse(trimmed, SHORT_US_DATE))
        .or_else(|_| Date::parse(trimmed, ISO_DATE))
        .ok()
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.0}%", value * 100.0)
    } else {
        "—".to_string()
    }
}

pub fn format_number(value: f64, digits: usize) -> String {
    if value.is_finite() {
        format!("{value:.digits$}")
    } else {
        "—".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn report_dates_are_month_first() {
        assert_eq!(format_date(date!(2024 - 03 - 07)), "03/07/2024");
    }

    #[test]
    fn parse_accepts_both_layouts() {
        assert_eq!(parse_date("03/07/2024"), Some(date!(2024 - 03 - 07)));
        assert_eq!(parse_date(" 2024-03-07 "), Some(date!(2024 - 03 - 07)));
        assert_eq!(parse_date("1/5/2024"), Some(date!(2024 - 01 - 05)));
        assert_eq!(parse_date("12/25/2024"), Some(date!(2024 - 12 - 25)));
        assert_eq!(format_date(date!(2024 - 01 - 05)), "01/05/2024");
        assert_eq!(parse_date("1.5"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn percent_handles_nan() {
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(f64::NAN), "—");
    }
}
