use base64::{engine::general_purpose::STANDARD, Engine as _};
use time::{macros::format_description, OffsetDateTime};

use crate::core::format;
use crate::questionnaire::{ColumnScheme, Score};

use super::report::Cell;

pub(crate) fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// `data:` URL for inline `<img>` rendering of generated SVG.
pub(crate) fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

pub(crate) fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}

pub(crate) fn export_filename(extension: &str) -> String {
    format!("govcheck-report-{}.{extension}", timestamp_slug())
}

/// Today's date in local time, falling back to UTC when the offset is unknown.
pub(crate) fn today() -> time::Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Category ratios read as percentages; per-question cells keep their raw points.
pub(crate) fn format_cell(cell: &Cell, scheme: ColumnScheme) -> String {
    match (cell, scheme) {
        (Cell::Value(value), ColumnScheme::PerCategory) => format::format_percent(*value),
        (Cell::Value(value), ColumnScheme::PerQuestion)
            if *value == f64::from(Score::SENTINEL) =>
        {
            "N/A".to_string()
        }
        (Cell::Value(value), ColumnScheme::PerQuestion) => format::format_number(*value, 0),
        (Cell::Blank, _) => "–".to_string(),
        (Cell::Malformed(raw), _) => format!("?{raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_is_escaped() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn filenames_carry_a_timestamp() {
        let name = export_filename("csv");
        assert!(name.starts_with("govcheck-report-"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "govcheck-report-".len() + 15 + 4);
    }

    #[test]
    fn cells_format_by_scheme() {
        assert_eq!(format_cell(&Cell::Value(0.5), ColumnScheme::PerCategory), "50%");
        assert_eq!(format_cell(&Cell::Value(2.0), ColumnScheme::PerQuestion), "2");
        assert_eq!(format_cell(&Cell::Value(-1.0), ColumnScheme::PerQuestion), "N/A");
        assert_eq!(format_cell(&Cell::Blank, ColumnScheme::PerCategory), "–");
    }

    #[test]
    fn data_urls_are_base64() {
        assert_eq!(
            svg_data_url("<svg/>"),
            "data:image/svg+xml;base64,PHN2Zy8+"
        );
    }
}
