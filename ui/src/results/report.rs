//! Report records: one timestamped row of scores per completed submission.

use time::Date;

use crate::core::format;
use crate::questionnaire::{CategoryValue, ColumnScheme, Edition, Evaluation};

use super::table::ReportTable;

/// One cell of a report row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Value(f64),
    /// Unanswered question or unscored category.
    Blank,
    /// Imported text that is not a number; kept verbatim for re-export.
    Malformed(String),
}

impl Cell {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Blank;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Value(value),
            _ => Cell::Malformed(trimmed.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Cell::Value(value) => Some(*value),
            Cell::Blank | Cell::Malformed(_) => None,
        }
    }

    /// Contribution to sums and averages; anything but a number counts as zero.
    pub fn aggregate(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn to_field(&self) -> String {
        match self {
            Cell::Value(value) => value.to_string(),
            Cell::Blank => String::new(),
            Cell::Malformed(raw) => raw.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    /// Data cells aligned with the schema's data columns.
    pub cells: Vec<Cell>,
    /// `None` only for imported rows whose date did not parse.
    pub date: Option<Date>,
}

impl ReportRecord {
    pub fn date_label(&self) -> String {
        self.date.map(format::format_date).unwrap_or_default()
    }

    /// Scored cells only; blanks and malformed cells are skipped.
    pub fn scored_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(Cell::value)
    }

    /// Wrap this record in a single-row table of the given edition.
    pub fn as_table(&self, edition: Edition) -> ReportTable {
        let mut table = ReportTable::for_edition(edition);
        table.push(self.clone());
        table
    }
}

/// Build the report row for an evaluated run, columns in declared order.
pub fn build_report(evaluation: &Evaluation, date: Date) -> ReportRecord {
    let catalog = evaluation.edition.catalog();
    let cells = match catalog.scheme {
        ColumnScheme::PerQuestion => evaluation
            .per_question
            .iter()
            .map(|score| match score {
                Some(score) => Cell::Value(f64::from(score.value())),
                None => Cell::Blank,
            })
            .collect(),
        ColumnScheme::PerCategory => evaluation
            .category_scores()
            .into_iter()
            .map(|score| match score.value {
                CategoryValue::Ratio(ratio) => Cell::Value(ratio),
                CategoryValue::Unscored => Cell::Blank,
            })
            .collect(),
    };
    tracing::info!(
        edition = ?evaluation.edition,
        answered = evaluation.answered,
        %date,
        "built report record"
    );
    ReportRecord {
        cells,
        date: Some(date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::QuestionnaireRun;
    use time::macros::date;

    #[test]
    fn cells_parse_and_degrade() {
        assert_eq!(Cell::parse(" 0.5 "), Cell::Value(0.5));
        assert_eq!(Cell::parse(""), Cell::Blank);
        assert_eq!(Cell::parse("n/a"), Cell::Malformed("n/a".into()));
        assert_eq!(Cell::parse("NaN"), Cell::Malformed("NaN".into()));
        assert_eq!(Cell::parse("oops").aggregate(), 0.0);
    }

    #[test]
    fn classic_report_keeps_raw_scores_and_sentinel() {
        let mut run = QuestionnaireRun::new(Edition::Classic);
        run.select(0, 0).unwrap();
        run.select(1, 3).unwrap();
        let report = build_report(&run.evaluate().unwrap(), date!(2024 - 05 - 02));
        assert_eq!(report.cells.len(), 15);
        assert_eq!(report.cells[0], Cell::Value(2.0));
        assert_eq!(report.cells[1], Cell::Value(-1.0));
        assert_eq!(report.cells[2], Cell::Blank);
        assert_eq!(report.date_label(), "05/02/2024");
    }

    #[test]
    fn weighted_report_has_one_cell_per_category() {
        let mut run = QuestionnaireRun::new(Edition::Weighted);
        run.select(0, 1).unwrap();
        let report = build_report(&run.evaluate().unwrap(), date!(2024 - 05 - 02));
        assert_eq!(report.cells.len(), 15);
        assert_eq!(report.cells[0], Cell::Value(0.5));
        assert!(report.cells[1..].iter().all(|cell| *cell == Cell::Blank));
    }
}
