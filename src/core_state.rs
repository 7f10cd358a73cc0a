//! Application state shared by the IPC command handlers.
//!
//! The records page is the only mutable state. It sits behind a `Mutex`
//! so every command applies its whole update before the next one starts.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::config::{self, ExportSettings};
use crate::export::{self, ExportError, PdfTableRenderer};
use crate::records::{PageSnapshot, RecordError, RecordsPage};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("{0}")]
    Record(#[from] RecordError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

pub struct CoreState {
    page: Mutex<RecordsPage>,
    /// Export layout and naming.
    pub settings: ExportSettings,
    /// Directory receiving exported documents.
    pub exports_dir: PathBuf,
}

impl CoreState {
    /// State with settings from `~/Sickday/settings.json` (if any).
    pub fn new() -> Self {
        Self::with_settings(
            ExportSettings::load(&config::settings_path()),
            config::exports_dir(),
        )
    }

    pub fn with_settings(settings: ExportSettings, exports_dir: PathBuf) -> Self {
        Self {
            page: Mutex::new(RecordsPage::new()),
            settings,
            exports_dir,
        }
    }

    /// Lock the page for one command.
    pub fn page(&self) -> Result<MutexGuard<'_, RecordsPage>, CoreError> {
        self.page.lock().map_err(|_| CoreError::LockPoisoned)
    }

    /// Applies `f` to the page and returns the refreshed snapshot.
    pub fn update<F>(&self, f: F) -> Result<PageSnapshot, CoreError>
    where
        F: FnOnce(&mut RecordsPage, NaiveDate) -> Result<(), RecordError>,
    {
        let today = Local::now().date_naive();
        let mut page = self.page()?;
        f(&mut *page, today)?;
        Ok(page.snapshot(today))
    }

    pub fn snapshot(&self) -> Result<PageSnapshot, CoreError> {
        let page = self.page()?;
        Ok(page.snapshot(Local::now().date_naive()))
    }

    /// Writes the current records as a PDF. `None` when there is nothing
    /// to export. The page lock is released before rendering.
    pub fn export_records(&self) -> Result<Option<PathBuf>, CoreError> {
        let table = self.page()?.export_table(&self.settings.title);
        let renderer = PdfTableRenderer::new(self.settings.clone());
        Ok(export::export_records(
            table,
            &renderer,
            &self.settings,
            &self.exports_dir,
        )?)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
