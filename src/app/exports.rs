//! CSV export of whatever the current view has loaded.

use std::path::PathBuf;

use super::{App, StatusLine};
use crate::error::ExportError;
use crate::export::{CsvExport, ExportKind};
use crate::view_state::View;

impl App {
    /// Export the main list of the current view (`e`).
    pub fn export_current_list(&mut self) {
        let kind = match self.router.current() {
            View::Sessions => ExportKind::Sessions,
            View::Logs => ExportKind::Logs,
            View::Crashes => ExportKind::Crashes,
            View::Overview | View::Visuals => {
                self.set_status(StatusLine::info("Nothing to export on this view."));
                return;
            }
        };
        self.export(kind);
    }

    /// Export the crash signature summary (`E`, Crashes only).
    pub fn export_summary(&mut self) {
        if self.router.current() != View::Crashes {
            self.set_status(StatusLine::info("Nothing to export on this view."));
            return;
        }
        self.export(ExportKind::CrashSummary);
    }

    /// Write the loaded rows of `kind` to the export directory and report
    /// the outcome in the status line.
    pub fn export(&mut self, kind: ExportKind) {
        match self.write_export(kind) {
            Ok((path, rows)) => {
                tracing::info!(kind = kind.cli_name(), rows, path = %path.display(), "exported");
                self.set_status(StatusLine::info(format!(
                    "Exported {} rows to {}",
                    rows,
                    path.display()
                )));
            }
            Err(err) => {
                tracing::warn!(kind = kind.cli_name(), %err, "export failed");
                self.set_status(StatusLine::error(format!("Export failed: {}", err)));
            }
        }
    }

    fn write_export(&self, kind: ExportKind) -> Result<(PathBuf, usize), ExportError> {
        let export = self.export_for(kind).ok_or(ExportError::NothingLoaded)?;
        let dir = self.config.snapshot().export_dir();
        let path = export.write_to(&dir)?;
        Ok((path, export.row_count()))
    }

    fn export_for(&self, kind: ExportKind) -> Option<CsvExport> {
        match kind {
            ExportKind::Sessions => self.sessions.rows().map(CsvExport::sessions),
            ExportKind::Logs => self.logs.rows().map(CsvExport::logs),
            ExportKind::Crashes => self.crashes.list().map(CsvExport::crashes),
            ExportKind::CrashSummary => self.crashes.summary().map(CsvExport::summary),
        }
    }
}
