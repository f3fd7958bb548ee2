//! Per-session state: in-progress answers, the accumulated report table and the
//! last rendered chart. Sessions never share state.

use std::collections::HashMap;
use std::fmt;

use time::Date;
use uuid::Uuid;

use crate::core::error::{AssessmentError, TableError};
use crate::questionnaire::{Edition, QuestionId, QuestionnaireRun, ResolvedAnswer};
use crate::results::{
    build_report, import_files, merge, partition_by_date_rows, progression_from_sections,
    progression_from_table, to_radar_series, ImportDiagnostic, Progression, RadarChart, RawSheet,
    ReportRecord, ReportTable, Section, UploadedFile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    id: SessionId,
    run: QuestionnaireRun,
    /// Submitted and imported reports, in arrival order.
    table: ReportTable,
    /// Last previewed or submitted report.
    current: Option<ReportRecord>,
    /// Whether `current` is already part of `table`.
    current_submitted: bool,
    chart: Option<RadarChart>,
    sections: Vec<Section>,
    diagnostics: Vec<ImportDiagnostic>,
}

impl SessionState {
    pub fn new(id: SessionId, edition: Edition) -> Self {
        Self {
            id,
            run: QuestionnaireRun::new(edition),
            table: ReportTable::for_edition(edition),
            current: None,
            current_submitted: false,
            chart: None,
            sections: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn edition(&self) -> Edition {
        self.run.catalog().edition
    }

    pub fn run(&self) -> &QuestionnaireRun {
        &self.run
    }

    pub fn table(&self) -> &ReportTable {
        &self.table
    }

    pub fn current(&self) -> Option<&ReportRecord> {
        self.current.as_ref()
    }

    pub fn chart(&self) -> Option<&RadarChart> {
        self.chart.as_ref()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn diagnostics(&self) -> &[ImportDiagnostic] {
        &self.diagnostics
    }

    /// Switching editions starts over: the table schema changes with it.
    pub fn set_edition(&mut self, edition: Edition) {
        if edition == self.edition() {
            return;
        }
        tracing::info!(session = %self.id, ?edition, "switching edition");
        *self = Self::new(self.id, edition);
    }

    pub fn select(
        &mut self,
        question: QuestionId,
        option: usize,
    ) -> Result<ResolvedAnswer, AssessmentError> {
        self.run.select(question, option)
    }

    pub fn clear(&mut self, question: QuestionId) {
        self.run.clear(question);
    }

    /// Score the current answers and overwrite the current report and chart.
    /// Nothing is appended to the table.
    pub fn preview(&mut self, date: Date) -> Result<&ReportRecord, AssessmentError> {
        let evaluation = match self.run.evaluate() {
            Ok(evaluation) => evaluation,
            Err(err) => {
                self.current = None;
                self.current_submitted = false;
                self.chart = (!self.table.is_empty()).then(|| to_radar_series(&self.table));
                return Err(err);
            }
        };
        self.current = Some(build_report(&evaluation, date));
        self.current_submitted = false;
        self.refresh_chart();
        tracing::debug!(session = %self.id, answered = evaluation.answered, "previewed report");
        self.current.as_ref().ok_or(AssessmentError::EmptySubmission)
    }

    /// Like [`preview`](Self::preview), then append the report to the session table.
    pub fn submit(&mut self, date: Date) -> Result<&ReportRecord, AssessmentError> {
        let record = self.preview(date)?.clone();
        self.table.push(record);
        self.current_submitted = true;
        self.refresh_chart();
        tracing::info!(session = %self.id, rows = self.table.len(), "submitted report");
        self.current.as_ref().ok_or(AssessmentError::EmptySubmission)
    }

    /// Merge every uploaded file that validates; the rest become diagnostics.
    pub fn import(&mut self, files: &[UploadedFile]) -> usize {
        let outcome = import_files(self.table.schema(), files);
        let accepted: usize = outcome.tables.iter().map(ReportTable::len).sum();
        self.table = merge(&self.table, &outcome.tables);
        self.diagnostics = outcome.rejected;
        self.refresh_chart();
        accepted
    }

    /// Note an upload that could not be decoded as text. It is skipped like
    /// any other rejected file.
    pub fn reject_unreadable(&mut self, file: &str) {
        tracing::warn!(session = %self.id, file, "upload is not UTF-8 text");
        self.diagnostics.push(ImportDiagnostic {
            file: file.to_string(),
            error: TableError::Unreadable,
        });
    }

    /// Load a free-form historical sheet split on its date rows.
    pub fn load_history(&mut self, file: &UploadedFile) -> Result<usize, TableError> {
        let sheet = RawSheet::from_csv(&file.contents)?;
        if sheet.header.is_empty() && sheet.rows.is_empty() {
            return Err(TableError::Empty);
        }
        self.sections = partition_by_date_rows(&sheet);
        tracing::info!(file = %file.name, sections = self.sections.len(), "loaded history sheet");
        Ok(self.sections.len())
    }

    pub fn export_csv(&self) -> Result<String, TableError> {
        self.chart_table().to_csv()
    }

    /// Everything plotted: the session table plus an unsubmitted preview.
    pub fn chart_table(&self) -> ReportTable {
        let mut table = self.table.clone();
        if let (Some(current), false) = (&self.current, self.current_submitted) {
            table.push(current.clone());
        }
        table
    }

    /// Progression over loaded history sections when present, otherwise over
    /// the plotted reports.
    pub fn progression(&self, normalizer: f64) -> Progression {
        if self.sections.is_empty() {
            progression_from_table(&self.chart_table(), normalizer)
        } else {
            progression_from_sections(&self.sections, normalizer)
        }
    }

    pub fn reset_answers(&mut self) {
        self.run.reset();
        self.current = None;
        self.current_submitted = false;
        self.refresh_chart();
    }

    fn refresh_chart(&mut self) {
        let table = self.chart_table();
        self.chart = (!table.is_empty()).then(|| to_radar_series(&table));
    }
}

/// Session states keyed by id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, SessionState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, edition: Edition) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, SessionState::new(id, edition));
        tracing::debug!(session = %id, "opened session");
        id
    }

    pub fn get(&self, id: SessionId) -> Option<&SessionState> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut SessionState> {
        self.sessions.get_mut(&id)
    }

    pub fn close(&mut self, id: SessionId) -> Option<SessionState> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::Cell;
    use time::macros::date;

    const DAY: Date = date!(2024 - 06 - 01);

    #[test]
    fn sessions_do_not_share_answers() {
        let mut store = SessionStore::new();
        let a = store.open(Edition::Weighted);
        let b = store.open(Edition::Weighted);
        store.get_mut(a).unwrap().select(0, 0).unwrap();
        assert_eq!(store.get(a).unwrap().run().answered(), 1);
        assert_eq!(store.get(b).unwrap().run().answered(), 0);
        assert!(store.close(a).is_some());
        assert!(store.get(a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_submission_has_no_chart() {
        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        assert_eq!(session.submit(DAY), Err(AssessmentError::EmptySubmission));
        assert!(session.chart().is_none());
        assert!(session.table().is_empty());
    }

    #[test]
    fn preview_overwrites_and_submit_appends() {
        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        session.select(0, 1).unwrap();
        session.preview(DAY).unwrap();
        session.select(0, 0).unwrap();
        session.preview(DAY).unwrap();
        assert!(session.table().is_empty());
        assert_eq!(session.chart_table().len(), 1);
        assert_eq!(session.current().unwrap().cells[0], Cell::Value(1.0));

        session.submit(DAY).unwrap();
        assert_eq!(session.table().len(), 1);
        assert_eq!(session.chart_table().len(), 1);
        assert_eq!(session.chart().unwrap().series.len(), 1);
    }

    #[test]
    fn invalid_selection_fails_fast() {
        let mut session = SessionState::new(SessionId::new(), Edition::Classic);
        assert!(matches!(
            session.select(0, 9),
            Err(AssessmentError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn import_merges_valid_files_and_reports_the_rest() {
        let mut source = SessionState::new(SessionId::new(), Edition::Weighted);
        source.select(0, 0).unwrap();
        source.submit(DAY).unwrap();
        let exported = source.export_csv().unwrap();

        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        let accepted = session.import(&[
            UploadedFile {
                name: "previous.csv".into(),
                contents: exported,
            },
            UploadedFile {
                name: "junk.csv".into(),
                contents: "a,b\n1,2\n".into(),
            },
        ]);
        assert_eq!(accepted, 1);
        assert_eq!(session.table().len(), 1);
        assert_eq!(session.diagnostics().len(), 1);
        assert_eq!(session.diagnostics()[0].file, "junk.csv");
        assert!(session.chart().is_some());
    }

    #[test]
    fn unreadable_uploads_are_reported_alongside_rejections() {
        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        let accepted = session.import(&[UploadedFile {
            name: "junk.csv".into(),
            contents: "a,b\n".into(),
        }]);
        session.reject_unreadable("legacy-1252.csv");
        assert_eq!(accepted, 0);
        assert!(session.table().is_empty());

        let files: Vec<&str> = session
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.file.as_str())
            .collect();
        assert_eq!(files, ["junk.csv", "legacy-1252.csv"]);
        assert_eq!(session.diagnostics()[1].error, TableError::Unreadable);
        assert!(session.diagnostics()[1].to_string().contains("UTF-8"));
    }

    #[test]
    fn unreadable_upload_alone_still_leaves_a_diagnostic() {
        let mut session = SessionState::new(SessionId::new(), Edition::Classic);
        assert_eq!(session.import(&[]), 0);
        session.reject_unreadable("scan.csv");
        assert_eq!(session.diagnostics().len(), 1);
        assert_eq!(
            session.diagnostics()[0].to_string(),
            "scan.csv was skipped: the file is not UTF-8 text; re-save it as CSV UTF-8"
        );
    }

    #[test]
    fn clearing_an_anchor_hides_its_follow_up() {
        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        session.select(1, 1).unwrap();
        session.select(2, 0).unwrap();
        assert_eq!(session.run().answered(), 2);
        session.clear(1);
        assert_eq!(session.run().answered(), 0);
        assert_eq!(session.preview(DAY), Err(AssessmentError::EmptySubmission));
    }

    #[test]
    fn switching_edition_starts_over() {
        let mut session = SessionState::new(SessionId::new(), Edition::Weighted);
        session.select(0, 0).unwrap();
        session.submit(DAY).unwrap();
        session.set_edition(Edition::Classic);
        assert_eq!(session.edition(), Edition::Classic);
        assert!(session.table().is_empty());
        assert_eq!(session.run().answered(), 0);
    }

    #[test]
    fn history_sheet_drives_progression() {
        let mut session = SessionState::new(SessionId::new(), Edition::Classic);
        let sections = session
            .load_history(&UploadedFile {
                name: "history.csv".into(),
                contents: ",Impact\nQ1,30\n,01/10/2024\nQ1,15\n".into(),
            })
            .unwrap();
        assert_eq!(sections, 2);
        let progression = session.progression(30.0);
        assert_eq!(progression.points.len(), 2);
        assert_eq!(progression.points[0].value, 1.0);
        assert_eq!(progression.points[1].value, 0.5);
    }
}
