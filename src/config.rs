use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Sickday";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a TTF/OTF font for PDF export.
pub const FONT_ENV_VAR: &str = "SICKDAY_FONT";

const SETTINGS_FILE: &str = "settings.json";

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "sickday_lib=info,sickday=info"
}

/// Get the application data directory
/// ~/Sickday/ on all platforms, falling back to the working directory
/// when no home directory is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Where exported PDFs are written.
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

pub fn settings_path() -> PathBuf {
    app_data_dir().join(SETTINGS_FILE)
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Layout and naming of the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub title: String,
    pub file_name: String,
    /// External TrueType font. Built-in Helvetica is used when unset, and
    /// it refuses tables with Japanese or Chinese text.
    pub font_path: Option<PathBuf>,
    pub title_font_size: f32,
    pub font_size: f32,
    pub header_fill: [u8; 3],
    pub header_text_gray: u8,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            title: "こどもの通院記録（孩子看病记录）".into(),
            file_name: "records.pdf".into(),
            font_path: None,
            title_font_size: 14.0,
            font_size: 12.0,
            header_fill: [220, 220, 220],
            header_text_gray: 20,
        }
    }
}

impl ExportSettings {
    /// Reads settings from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Settings file if present and valid, defaults otherwise, then the
    /// font environment override.
    pub fn load(path: &Path) -> Self {
        let mut settings = if path.exists() {
            match Self::from_file(path) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring settings file");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        settings.apply_font_override(std::env::var_os(FONT_ENV_VAR).map(PathBuf::from));
        settings
    }

    fn apply_font_override(&mut self, font: Option<PathBuf>) {
        if let Some(font) = font.filter(|p| !p.as_os_str().is_empty()) {
            self.font_path = Some(font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_named_after_app() {
        assert!(app_data_dir().ends_with("Sickday"));
    }

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        assert!(exports.starts_with(app_data_dir()));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn defaults_match_export_layout() {
        let settings = ExportSettings::default();
        assert_eq!(settings.file_name, "records.pdf");
        assert_eq!(settings.font_size, 12.0);
        assert_eq!(settings.header_fill, [220, 220, 220]);
        assert!(settings.font_path.is_none());
    }

    #[test]
    fn partial_settings_file_keeps_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, r#"{ "title": "Clinic log", "font_size": 10.0 }"#).unwrap();

        let settings = ExportSettings::from_file(&path).unwrap();
        assert_eq!(settings.title, "Clinic log");
        assert_eq!(settings.font_size, 10.0);
        assert_eq!(settings.file_name, "records.pdf");
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(ExportSettings::from_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_settings_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = ExportSettings::load(&tmp.path().join("absent.json"));
        assert_eq!(settings.title, ExportSettings::default().title);
    }

    #[test]
    fn font_override_replaces_configured_font() {
        let mut settings = ExportSettings {
            font_path: Some(PathBuf::from("/fonts/a.ttf")),
            ..ExportSettings::default()
        };
        settings.apply_font_override(Some(PathBuf::from("/fonts/b.otf")));
        assert_eq!(settings.font_path, Some(PathBuf::from("/fonts/b.otf")));

        settings.apply_font_override(Some(PathBuf::new()));
        assert_eq!(settings.font_path, Some(PathBuf::from("/fonts/b.otf")));
    }
}
