pub mod export;
pub mod records;
pub mod symptoms;

/// Health check IPC command, verifies the backend is running
#[tauri::command]
pub fn health_check() -> String {
    tracing::debug!("Health check called");
    "ok".to_string()
}
