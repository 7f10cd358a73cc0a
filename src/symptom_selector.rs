//! Symptom selector: checklist + conditional sub-value + free text.
//!
//! An editing session lives from `open` until `confirm` or `cancel`.
//! Confirming flattens the session into one display string and drops it;
//! the string is never parsed back, so reopening always starts empty.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::models::symptom::{find_option, SymptomOption, SYMPTOM_CATALOG};
use crate::records::RecordError;

/// Separator between entries of the confirmed summary.
pub const SUMMARY_SEPARATOR: &str = ", ";

/// Working state of one open selector session.
#[derive(Debug, Clone, Default)]
pub struct SymptomSession {
    chosen: BTreeSet<&'static str>,
    sub_values: HashMap<&'static str, String>,
    custom_text: String,
}

impl SymptomSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn option(key: &str) -> Result<&'static SymptomOption, RecordError> {
        find_option(key).ok_or_else(|| RecordError::UnknownSymptom(key.to_string()))
    }

    /// Flips membership of `key`. Returns whether it is chosen afterwards.
    /// Unchecking an option drops its sub-value.
    pub fn toggle(&mut self, key: &str) -> Result<bool, RecordError> {
        let option = Self::option(key)?;
        if self.chosen.remove(option.key) {
            self.sub_values.remove(option.key);
            Ok(false)
        } else {
            self.chosen.insert(option.key);
            Ok(true)
        }
    }

    pub fn is_chosen(&self, key: &str) -> bool {
        self.chosen.contains(key)
    }

    /// Stores opaque text for a sub-value option. Ignored while the option
    /// is unchecked, since its input is not shown then.
    pub fn set_sub_value(&mut self, key: &str, text: &str) -> Result<(), RecordError> {
        let option = Self::option(key)?;
        if !option.requires_sub_value() {
            return Err(RecordError::NoSubValue(key.to_string()));
        }
        if !self.chosen.contains(option.key) {
            tracing::debug!(key, "Sub-value for unchecked option ignored");
            return Ok(());
        }
        self.sub_values.insert(option.key, text.to_string());
        Ok(())
    }

    pub fn sub_value(&self, key: &str) -> &str {
        self.sub_values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set_custom_text(&mut self, text: &str) {
        self.custom_text = text.to_string();
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// Flattens the session: catalog order first, then the trimmed custom
    /// text, joined with `", "`.
    pub fn summarize(&self) -> String {
        let mut entries: Vec<String> = SYMPTOM_CATALOG
            .iter()
            .filter(|o| self.chosen.contains(o.key))
            .map(|o| o.summary(self.sub_value(o.key)))
            .collect();

        let custom = self.custom_text.trim();
        if !custom.is_empty() {
            entries.push(custom.to_string());
        }

        entries.join(SUMMARY_SEPARATOR)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            options: SYMPTOM_CATALOG
                .iter()
                .map(|o| {
                    let checked = self.chosen.contains(o.key);
                    OptionState {
                        key: o.key.to_string(),
                        label: o.label.to_string(),
                        checked,
                        requires_sub_value: o.requires_sub_value(),
                        show_sub_value: checked && o.requires_sub_value(),
                        sub_value: self.sub_value(o.key).to_string(),
                    }
                })
                .collect(),
            custom_text: self.custom_text.clone(),
        }
    }
}

/// Selector component: owns at most one open session.
#[derive(Debug, Clone, Default)]
pub struct SymptomSelector {
    session: Option<SymptomSession>,
}

impl SymptomSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a fresh session, or keeps the one already open.
    pub fn open(&mut self) -> &mut SymptomSession {
        if self.session.is_none() {
            tracing::debug!("Symptom selector opened");
        }
        self.session.get_or_insert_with(SymptomSession::new)
    }

    pub fn session(&self) -> Option<&SymptomSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Result<&mut SymptomSession, RecordError> {
        self.session.as_mut().ok_or(RecordError::SelectorClosed)
    }

    /// Ends the session and returns its summary.
    pub fn confirm(&mut self) -> Result<String, RecordError> {
        let session = self.session.take().ok_or(RecordError::SelectorClosed)?;
        let summary = session.summarize();
        tracing::debug!(summary = %summary, "Symptom selection confirmed");
        Ok(summary)
    }

    /// Ends the session without producing a value.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Symptom selector cancelled");
        }
    }

    pub fn view(&self) -> Option<SessionView> {
        self.session.as_ref().map(SymptomSession::view)
    }
}

/// Render state of an open session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub options: Vec<OptionState>,
    pub custom_text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionState {
    pub key: String,
    pub label: String,
    pub checked: bool,
    pub requires_sub_value: bool,
    pub show_sub_value: bool,
    pub sub_value: String,
}
