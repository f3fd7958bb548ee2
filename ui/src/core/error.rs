//! Error kinds surfaced by the scoring engine, the report table codec and the export paths.

use thiserror::Error;

/// Failures raised while scoring a questionnaire run.
///
/// `InvalidSelection` and `UnknownQuestion` are caller-contract violations: the
/// form host only ever offers options that exist in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("question {question} has no option {index} (it offers {options})")]
    InvalidSelection {
        question: usize,
        index: usize,
        options: usize,
    },
    #[error("question {0} is not part of this catalog")]
    UnknownQuestion(usize),
    #[error("nothing to show yet: answer at least one question before submitting")]
    EmptySubmission,
}

/// Failures raised while reading a report table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("column {position} should be `{expected}` but found `{found}`")]
    SchemaMismatch {
        position: usize,
        expected: String,
        found: String,
    },
    #[error("column {position} (`{expected}`) is missing")]
    MissingColumn { position: usize, expected: String },
    #[error("unexpected extra column {position} (`{found}`)")]
    ExtraColumn { position: usize, found: String },
    #[error("the file has no header row")]
    Empty,
    #[error("unreadable CSV: {0}")]
    Csv(String),
    #[error("the file is not UTF-8 text; re-save it as CSV UTF-8")]
    Unreadable,
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Failures raised while loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("settings file unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures raised while delivering an export artifact.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("nothing to export yet")]
    NothingToExport,
    #[error("unable to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to encode CSV: {0}")]
    Csv(String),
    #[error("unable to render chart: {0}")]
    Render(String),
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("{0}")]
    Platform(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<TableError> for ExportError {
    fn from(err: TableError) -> Self {
        Self::Csv(err.to_string())
    }
}
