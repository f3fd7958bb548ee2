//! Historical sheets: flat tables where rows made only of dates separate
//! successive assessments. Used to rebuild a time series from a sheet that was
//! appended to by hand.

use time::Date;

use crate::core::{error::TableError, format};

use super::report::Cell;

/// Normalizer for section averages: fifteen questions worth two points each.
pub const DEFAULT_NORMALIZER: f64 = 30.0;

/// A CSV read without schema validation. The first column is a row label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawSheet {
    pub fn from_csv(text: &str) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let header = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for row in reader.records() {
            rows.push(row?.iter().map(str::to_string).collect());
        }
        Ok(Self { header, rows })
    }
}

/// Contiguous data rows between two date rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub rows: Vec<Vec<String>>,
    /// Date of the separator row that closed this section; the trailing run has none.
    pub marker: Option<Date>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of every value cell (label column excluded). Cells that are not
    /// numbers count as zero.
    pub fn sum(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.iter().skip(1))
            .map(|raw| Cell::parse(raw).aggregate())
            .sum()
    }

    pub fn average(&self, normalizer: f64) -> f64 {
        if normalizer > 0.0 {
            self.sum() / normalizer
        } else {
            0.0
        }
    }
}

/// Date carried by a separator row: every cell after the label parses as a date.
pub fn date_row(row: &[String]) -> Option<Date> {
    let mut values = row.iter().skip(1);
    let first = format::parse_date(values.next()?)?;
    values
        .all(|raw| format::parse_date(raw).is_some())
        .then_some(first)
}

/// Split a sheet into sections at its date rows. Separator rows are dropped,
/// empty runs produce no section, and the order of rows is preserved.
pub fn partition_by_date_rows(sheet: &RawSheet) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for row in &sheet.rows {
        match date_row(row) {
            Some(marker) => {
                if !current.is_empty() {
                    sections.push(Section {
                        rows: std::mem::take(&mut current),
                        marker: Some(marker),
                    });
                }
            }
            None => current.push(row.clone()),
        }
    }

    if !current.is_empty() {
        sections.push(Section {
            rows: current,
            marker: None,
        });
    }

    tracing::debug!(rows = sheet.rows.len(), sections = sections.len(), "partitioned sheet");
    sections
}
