pub mod config;
pub mod core_state;
pub mod date_input;
pub mod export;
pub mod models;
pub mod records;
pub mod symptom_selector;

#[cfg(feature = "desktop")]
pub mod commands;

/// Installs the tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;

    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let state = core_state::CoreState::new();
    match &state.settings.font_path {
        Some(font) => tracing::info!(font = %font.display(), "PDF export font configured"),
        None => tracing::warn!(
            "No PDF font configured; set {} for Japanese/Chinese text",
            config::FONT_ENV_VAR
        ),
    }

    tauri::Builder::default()
        .manage(Arc::new(state))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::records::get_page_state,
            commands::records::set_draft_field,
            commands::records::add_record,
            commands::records::delete_record,
            commands::records::toggle_date_picker,
            commands::records::type_date,
            commands::records::pick_date,
            commands::records::navigate_date_month,
            commands::symptoms::get_symptom_catalog,
            commands::symptoms::open_symptom_selector,
            commands::symptoms::toggle_symptom,
            commands::symptoms::set_symptom_sub_value,
            commands::symptoms::set_custom_symptom,
            commands::symptoms::confirm_symptoms,
            commands::symptoms::cancel_symptom_selector,
            commands::export::export_records_pdf,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Sickday");
}
