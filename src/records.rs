//! Records page: owns the draft entry and the record list, and wires the
//! date input and symptom selector into the draft.
//!
//! Components hand committed values back to the page, which writes them
//! into the draft. Records are only ever appended or removed whole.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::date_input::{CalendarMonth, DateInput};
use crate::export::{TableDocument, EXPORT_HEADER};
use crate::models::{DraftEntry, DraftField, Record};
use crate::symptom_selector::{SessionView, SymptomSelector};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("日期不能为空，请选择或输入日期。")]
    BlankDate,

    #[error("Unknown symptom option: {0}")]
    UnknownSymptom(String),

    #[error("Symptom option {0} takes no extra value")]
    NoSubValue(String),

    #[error("Symptom selector is not open")]
    SelectorClosed,

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Page-level container. Owns everything the form shows.
#[derive(Debug, Clone)]
pub struct RecordsPage {
    records: Vec<Record>,
    next_id: u64,
    draft: DraftEntry,
    date_input: DateInput,
    symptom_selector: SymptomSelector,
}

impl Default for RecordsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsPage {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            draft: DraftEntry::default(),
            date_input: DateInput::new(),
            symptom_selector: SymptomSelector::new(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    // ── Draft ───────────────────────────────────────────

    pub fn set_draft_field(&mut self, field: DraftField, value: &str) {
        self.draft.set(field, value.to_string());
    }

    pub fn set_time(&mut self, value: &str) {
        self.set_draft_field(DraftField::Time, value);
    }

    pub fn set_medicine(&mut self, value: &str) {
        self.set_draft_field(DraftField::Medicine, value);
    }

    // ── Date input wiring ───────────────────────────────

    pub fn type_date(&mut self, text: &str) {
        let value = self.date_input.on_type(text);
        self.draft.set(DraftField::Date, value);
    }

    pub fn pick_date(&mut self, date: NaiveDate) {
        let value = self.date_input.select(date);
        self.draft.set(DraftField::Date, value);
    }

    pub fn toggle_date_overlay(&mut self) -> bool {
        self.date_input.toggle()
    }

    pub fn navigate_date_month(&mut self, today: NaiveDate, delta: i32) {
        self.date_input.navigate_month(&self.draft.date, today, delta);
    }

    pub fn date_calendar(&self, today: NaiveDate) -> CalendarMonth {
        self.date_input.calendar(&self.draft.date, today)
    }

    // ── Symptom selector wiring ─────────────────────────

    pub fn open_symptom_selector(&mut self) {
        self.symptom_selector.open();
    }

    pub fn toggle_symptom(&mut self, key: &str) -> Result<bool, RecordError> {
        self.symptom_selector.session_mut()?.toggle(key)
    }

    pub fn set_symptom_sub_value(&mut self, key: &str, text: &str) -> Result<(), RecordError> {
        self.symptom_selector.session_mut()?.set_sub_value(key, text)
    }

    pub fn set_custom_symptom(&mut self, text: &str) -> Result<(), RecordError> {
        self.symptom_selector.session_mut()?.set_custom_text(text);
        Ok(())
    }

    /// Confirms the open selection and stores its summary in the draft.
    pub fn confirm_symptoms(&mut self) -> Result<String, RecordError> {
        let summary = self.symptom_selector.confirm()?;
        self.draft.set(DraftField::Symptom, summary.clone());
        Ok(summary)
    }

    pub fn cancel_symptom_selector(&mut self) {
        self.symptom_selector.cancel();
    }

    // ── Record list ─────────────────────────────────────

    /// Appends the draft as a new record and clears the draft.
    /// A blank date is rejected without touching any state.
    pub fn add_record(&mut self) -> Result<Record, RecordError> {
        if self.draft.date.trim().is_empty() {
            tracing::warn!("Rejected record with blank date");
            return Err(RecordError::BlankDate);
        }

        let id = self.next_id;
        self.next_id += 1;
        let record = self.draft.take_into_record(id);
        self.records.push(record.clone());

        tracing::info!(id, total = self.records.len(), "Record added");
        Ok(record)
    }

    /// Removes the record with `id`. Absent ids are ignored.
    pub fn delete_record(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != before;
        if removed {
            tracing::info!(id, total = self.records.len(), "Record deleted");
        } else {
            tracing::debug!(id, "Delete of unknown record ignored");
        }
        removed
    }

    pub fn can_export(&self) -> bool {
        !self.records.is_empty()
    }

    /// Table handed to the document renderer, one row per record in list
    /// order. `None` while there is nothing to export.
    pub fn export_table(&self, title: &str) -> Option<TableDocument> {
        if !self.can_export() {
            return None;
        }
        Some(TableDocument {
            title: title.to_string(),
            header: EXPORT_HEADER.map(String::from),
            rows: self.records.iter().map(Record::cells).collect(),
        })
    }

    pub fn snapshot(&self, today: NaiveDate) -> PageSnapshot {
        PageSnapshot {
            records: self.records.clone(),
            draft: self.draft.clone(),
            date_overlay_open: self.date_input.is_open(),
            calendar: self.date_calendar(today),
            symptom_session: self.symptom_selector.view(),
            can_export: self.can_export(),
        }
    }
}

/// Everything the page needs to re-render after a command.
#[derive(Debug, Clone, Serialize)]
pub struct PageSnapshot {
    pub records: Vec<Record>,
    pub draft: DraftEntry,
    pub date_overlay_open: bool,
    pub calendar: CalendarMonth,
    pub symptom_session: Option<SessionView>,
    pub can_export: bool,
}
