//! Record export: Tauri IPC command.

use std::sync::Arc;

use tauri::State;

use crate::core_state::CoreState;

/// Exports all records as a PDF table. Returns the written file path, or
/// `None` when there are no records.
#[tauri::command]
pub fn export_records_pdf(state: State<'_, Arc<CoreState>>) -> Result<Option<String>, String> {
    let path = state.export_records().map_err(|e| e.to_string())?;
    Ok(path.map(|p| p.to_string_lossy().into_owned()))
}
