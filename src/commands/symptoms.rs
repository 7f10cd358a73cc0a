//! Symptom selector: Tauri IPC commands.
//!
//! The selector session lives in the page state between
//! `open_symptom_selector` and `confirm_symptoms` / `cancel_symptom_selector`.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::models::symptom::{self, SymptomOptionInfo};
use crate::records::PageSnapshot;

/// Returns the static checklist.
#[tauri::command]
pub fn get_symptom_catalog() -> Vec<SymptomOptionInfo> {
    symptom::get_symptom_catalog()
}

#[tauri::command]
pub fn open_symptom_selector(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| {
            page.open_symptom_selector();
            Ok(())
        })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_symptom(key: String, state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| page.toggle_symptom(&key).map(|_| ()))
        .map_err(|e| e.to_string())
}

/// Text for an option's extra input (the temperature for fever).
#[tauri::command]
pub fn set_symptom_sub_value(
    key: String,
    value: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| page.set_symptom_sub_value(&key, &value))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_custom_symptom(
    text: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| page.set_custom_symptom(&text))
        .map_err(|e| e.to_string())
}

/// Flattens the selection into the draft's symptom field and closes the selector.
#[tauri::command]
pub fn confirm_symptoms(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| page.confirm_symptoms().map(|_| ()))
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn cancel_symptom_selector(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| {
            page.cancel_symptom_selector();
            Ok(())
        })
        .map_err(|e| e.to_string())
}
