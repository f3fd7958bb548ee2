//! Report records and tables, historical sections, charts and the panels that
//! show them.

mod charts;
mod export;
mod import;
mod list;
mod report;
mod sections;
mod table;
mod utils;

pub use charts::{
    progression_from_sections, progression_from_table, radial_range, render_progression_svg,
    render_radar_svg, to_radar_series, Progression, ProgressionPoint, RadarChart, RadarSeries,
    ResultsCharts, MIN_RANGE,
};
pub use export::ResultsExportPanel;
pub use import::ResultsImportPanel;
pub use list::ResultsList;
pub use report::{build_report, Cell, ReportRecord};
pub use sections::{date_row, partition_by_date_rows, RawSheet, Section, DEFAULT_NORMALIZER};
pub use table::{
    import_files, merge, validate_schema, ImportDiagnostic, ImportOutcome, ReportSchema,
    ReportTable, UploadedFile,
};

pub(crate) use utils::*;
