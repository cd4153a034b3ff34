//! CSV (and HTML snapshot) export of the currently loaded rows.
//!
//! An export never fetches: it serialises whatever the view already holds,
//! with a fixed header and a fixed file name per kind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::format::{encode_csv, escape_html, table_html};
use crate::models::{CrashRecord, CrashSignature, LogRecord, SessionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Sessions,
    Logs,
    Crashes,
    CrashSummary,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [
        ExportKind::Sessions,
        ExportKind::Logs,
        ExportKind::Crashes,
        ExportKind::CrashSummary,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            ExportKind::Sessions => "admin_sessions.csv",
            ExportKind::Logs => "admin_logs.csv",
            ExportKind::Crashes => "admin_crashes.csv",
            ExportKind::CrashSummary => "admin_crash_summary.csv",
        }
    }

    pub fn header(&self) -> &'static [&'static str] {
        match self {
            ExportKind::Sessions => &[
                "session_id",
                "user_id",
                "session_start",
                "session_end",
                "total_duration",
            ],
            ExportKind::Logs => &["log_id", "user_id", "log_timestamp", "log_content"],
            ExportKind::Crashes => &[
                "crash_id",
                "user_id",
                "crash_time",
                "session_start",
                "session_end",
                "provider",
                "event_id",
                "exception_code",
                "faulting_module",
                "message",
            ],
            ExportKind::CrashSummary => &["signature", "count", "last_seen", "example"],
        }
    }

    /// Name accepted by `--export`.
    pub fn cli_name(&self) -> &'static str {
        match self {
            ExportKind::Sessions => "sessions",
            ExportKind::Logs => "logs",
            ExportKind::Crashes => "crashes",
            ExportKind::CrashSummary => "summary",
        }
    }

    pub fn from_cli_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.cli_name() == name)
    }
}

/// Rows ready to be written, header excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    kind: ExportKind,
    rows: Vec<Vec<String>>,
}

impl CsvExport {
    pub fn sessions(rows: &[SessionRecord]) -> Self {
        Self::build(ExportKind::Sessions, rows, |s| {
            vec![
                s.session_id.clone(),
                s.user_id.clone(),
                s.session_start.clone(),
                s.session_end.clone(),
                s.total_duration.clone(),
            ]
        })
    }

    pub fn logs(rows: &[LogRecord]) -> Self {
        Self::build(ExportKind::Logs, rows, |l| {
            vec![
                l.log_id.clone(),
                l.user_id.clone(),
                l.log_timestamp.clone(),
                l.log_content.clone(),
            ]
        })
    }

    pub fn crashes(rows: &[CrashRecord]) -> Self {
        Self::build(ExportKind::Crashes, rows, |c| {
            vec![
                c.crash_id.clone(),
                c.user_id.clone(),
                c.crash_time.clone(),
                c.session_start.clone(),
                c.session_end.clone(),
                c.provider.clone(),
                c.event_id.clone(),
                c.exception_code.clone(),
                c.faulting_module.clone(),
                c.message.clone(),
            ]
        })
    }

    pub fn summary(rows: &[CrashSignature]) -> Self {
        Self::build(ExportKind::CrashSummary, rows, |s| {
            vec![
                s.signature.clone(),
                s.count.to_string(),
                s.last_seen.clone(),
                s.example.clone(),
            ]
        })
    }

    fn build<T>(kind: ExportKind, rows: &[T], row: impl Fn(&T) -> Vec<String>) -> Self {
        Self {
            kind,
            rows: rows.iter().map(row).collect(),
        }
    }

    pub fn kind(&self) -> ExportKind {
        self.kind
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Header followed by every row, as CSV text.
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut all: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);
        all.push(self.kind.header().iter().map(|h| h.to_string()).collect());
        all.extend(self.rows.iter().cloned());
        Ok(encode_csv(&all)?)
    }

    /// Stand-alone HTML page with the same header and rows.
    pub fn to_html(&self) -> String {
        let title = escape_html(self.kind.filename());
        format!(
            "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>\n",
            title,
            table_html(self.kind.header(), &self.rows)
        )
    }

    /// Write `<dir>/<fixed file name>` and return its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.kind.filename());
        write_file(&path, self.to_csv()?)?;
        tracing::info!(path = %path.display(), rows = self.rows.len(), "exported csv");
        Ok(path)
    }

    /// Write the HTML snapshot next to where the CSV would go.
    pub fn write_html_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let path = dir.join(self.kind.filename()).with_extension("html");
        write_file(&path, self.to_html())?;
        tracing::info!(path = %path.display(), rows = self.rows.len(), "exported html");
        Ok(path)
    }
}

fn write_file(path: &Path, contents: String) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
