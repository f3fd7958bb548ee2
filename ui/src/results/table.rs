//! Report tables: schema validation, CSV codec and merging of imported files.

use std::fmt;

use crate::core::{error::TableError, format};
use crate::questionnaire::Edition;

use super::report::{Cell, ReportRecord};

/// Fixed column list of an edition's report table, timestamp last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSchema {
    edition: Edition,
    columns: Vec<String>,
}

impl ReportSchema {
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            edition,
            columns: edition.catalog().report_columns(),
        }
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn data_columns(&self) -> &[String] {
        &self.columns[..self.columns.len() - 1]
    }

    /// Exact, order-sensitive header check naming the first offending column
    /// (1-based position).
    pub fn check_header<S: AsRef<str>>(&self, header: &[S]) -> Result<(), TableError> {
        for (index, expected) in self.columns.iter().enumerate() {
            let position = index + 1;
            match header.get(index) {
                None => {
                    return Err(TableError::MissingColumn {
                        position,
                        expected: expected.clone(),
                    })
                }
                Some(found) if found.as_ref().trim() != expected => {
                    return Err(TableError::SchemaMismatch {
                        position,
                        expected: expected.clone(),
                        found: found.as_ref().trim().to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        if let Some(extra) = header.get(self.columns.len()) {
            return Err(TableError::ExtraColumn {
                position: self.columns.len() + 1,
                found: extra.as_ref().trim().to_string(),
            });
        }
        Ok(())
    }
}

/// True when `header` matches the schema exactly.
pub fn validate_schema<S: AsRef<str>>(schema: &ReportSchema, header: &[S]) -> bool {
    schema.check_header(header).is_ok()
}

/// Ordered report records sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    schema: ReportSchema,
    records: Vec<ReportRecord>,
}

impl ReportTable {
    pub fn new(schema: ReportSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    pub fn for_edition(edition: Edition) -> Self {
        Self::new(ReportSchema::for_edition(edition))
    }

    pub fn schema(&self) -> &ReportSchema {
        &self.schema
    }

    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ReportRecord) {
        self.records.push(record);
    }

    pub fn header(&self) -> &[String] {
        self.schema.columns()
    }

    pub fn to_csv(&self) -> Result<String, TableError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.schema.columns())?;
        for record in &self.records {
            let mut row: Vec<String> = record.cells.iter().map(Cell::to_field).collect();
            row.push(record.date_label());
            writer.write_record(&row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| TableError::Csv(err.to_string()))?;
        String::from_utf8(bytes).map_err(|err| TableError::Csv(err.to_string()))
    }

    /// Parse an exported table. The header must match `schema` exactly; data
    /// cells that do not parse are kept as [`Cell::Malformed`].
    pub fn from_csv(schema: &ReportSchema, text: &str) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let header: Vec<String> = reader
            .headers()?
            .iter()
            .map(|field| field.trim_start_matches('\u{feff}').to_string())
            .collect();
        if header.iter().all(|field| field.trim().is_empty()) {
            return Err(TableError::Empty);
        }
        schema.check_header(&header)?;

        let data_width = schema.data_columns().len();
        let mut table = Self::new(schema.clone());
        for (line, row) in reader.records().enumerate() {
            let row = row?;
            let mut cells: Vec<Cell> = (0..data_width)
                .map(|index| row.get(index).map(Cell::parse).unwrap_or(Cell::Blank))
                .collect();
            let raw_date = row.get(data_width).unwrap_or_default();
            let date = format::parse_date(raw_date);
            if date.is_none() {
                tracing::warn!(row = line + 1, raw_date, "report row without a readable date");
            }
            if cells.iter().any(|cell| matches!(cell, Cell::Malformed(_))) {
                tracing::warn!(row = line + 1, "report row has non-numeric cells");
            }
            cells.truncate(data_width);
            table.push(ReportRecord { cells, date });
        }
        Ok(table)
    }
}

/// Concatenate `new_tables` after `existing`, preserving row order. No sorting
/// and no deduplication; a table of a different schema is skipped whole.
pub fn merge(existing: &ReportTable, new_tables: &[ReportTable]) -> ReportTable {
    let mut merged = existing.clone();
    for table in new_tables {
        if table.schema != existing.schema {
            tracing::warn!(
                edition = ?table.schema.edition,
                "skipping table with a different schema"
            );
            continue;
        }
        merged.records.extend(table.records.iter().cloned());
    }
    tracing::debug!(rows = merged.len(), "merged report tables");
    merged
}

/// A user-supplied file, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub contents: String,
}

/// Why an uploaded file was left out of the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDiagnostic {
    pub file: String,
    pub error: TableError,
}

impl fmt::Display for ImportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was skipped: {}", self.file, self.error)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub tables: Vec<ReportTable>,
    pub rejected: Vec<ImportDiagnostic>,
}

/// Validate each file on its own; a failing file never partially merges.
pub fn import_files(schema: &ReportSchema, files: &[UploadedFile]) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for file in files {
        match ReportTable::from_csv(schema, &file.contents) {
            Ok(table) => {
                tracing::info!(file = %file.name, rows = table.len(), "accepted report file");
                outcome.tables.push(table);
            }
            Err(error) => {
                tracing::warn!(file = %file.name, %error, "rejected report file");
                outcome.rejected.push(ImportDiagnostic {
                    file: file.name.clone(),
                    error,
                });
            }
        }
    }
    outcome
}
