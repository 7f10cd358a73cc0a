//! Records page: Tauri IPC commands for the draft and the record list.
//!
//! Every mutating command returns the refreshed `PageSnapshot`.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;
use crate::date_input::{parse_date, DATE_FORMAT};
use crate::models::DraftField;
use crate::records::PageSnapshot;

/// Current page state, for the initial render.
#[tauri::command]
pub fn get_page_state(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state.snapshot().map_err(|e| e.to_string())
}

/// Stores raw text typed into one of the draft inputs.
#[tauri::command]
pub fn set_draft_field(
    field: String,
    value: String,
    state: State<'_, Arc<CoreState>>,
) -> Result<PageSnapshot, String> {
    let field = field.parse::<DraftField>().map_err(|e| e.to_string())?;
    state
        .update(|page, _| {
            if field == DraftField::Date {
                page.type_date(&value);
            } else {
                page.set_draft_field(field, &value);
            }
            Ok(())
        })
        .map_err(|e| e.to_string())
}

/// Adds the draft as a record. A blank date returns the user-facing notice.
#[tauri::command]
pub fn add_record(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| page.add_record().map(|_| ()))
        .map_err(|e| e.to_string())
}

/// Deletes a record by id. Unknown ids are ignored.
#[tauri::command]
pub fn delete_record(id: u64, state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| {
            page.delete_record(id);
            Ok(())
        })
        .map_err(|e| e.to_string())
}

/// Opens or closes the calendar overlay.
#[tauri::command]
pub fn toggle_date_picker(state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| {
            page.toggle_date_overlay();
            Ok(())
        })
        .map_err(|e| e.to_string())
}

/// Raw keystrokes in the date text field.
#[tauri::command]
pub fn type_date(text: String, state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    state
        .update(|page, _| {
            page.type_date(&text);
            Ok(())
        })
        .map_err(|e| e.to_string())
}

/// A day picked in the calendar overlay (`YYYY-MM-DD`).
#[tauri::command]
pub fn pick_date(date: String, state: State<'_, Arc<CoreState>>) -> Result<PageSnapshot, String> {
    let date = parse_date(&date)
        .ok_or_else(|| format!("Invalid date format (expected {DATE_FORMAT})"))?;
    state
        .update(|page, _| {
            page.pick_date(date);
            Ok(())
        })
        .map_err(|e| e.to_string())
}

/// Moves the calendar overlay by `delta` months.
#[tauri::command]
pub fn navigate_date_month(
    delta: i32,
    state: State<'_, Arc<CoreState>>,
) -> Result<PageSnapshot, String> {
    state
        .update(|page, today| {
            page.navigate_date_month(today, delta);
            Ok(())
        })
        .map_err(|e| e.to_string())
}
