//! State of the plain table views (Sessions, Logs).

use super::Selection;
use crate::format::truncate_chars;
use crate::models::LogRecord;

/// Characters of log content shown in the Logs table.
pub const LOG_PREVIEW_CHARS: usize = 80;

/// Rows loaded for one table view.
///
/// `rows` is `None` until the first load completes; an empty vector means the
/// service returned nothing.
#[derive(Debug, Clone)]
pub struct RowsView<T> {
    rows: Option<Vec<T>>,
    pub selection: Selection,
}

impl<T> Default for RowsView<T> {
    fn default() -> Self {
        Self {
            rows: None,
            selection: Selection::default(),
        }
    }
}

impl<T> RowsView<T> {
    pub fn rows(&self) -> Option<&[T]> {
        self.rows.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.rows.is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the rows with a fresh load and drop the selection.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = Some(rows);
        self.selection.clear();
    }

    pub fn clear(&mut self) {
        self.rows = None;
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&T> {
        let index = self.selection.index()?;
        self.rows.as_ref()?.get(index)
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        self.selection.next(len);
    }

    pub fn select_prev(&mut self) {
        let len = self.len();
        self.selection.prev(len);
    }
}

/// Table cell for a log's content.
pub fn log_preview(log: &LogRecord) -> &str {
    truncate_chars(&log.log_content, LOG_PREVIEW_CHARS)
}

/// Detail panel text for a selected log.
pub fn log_detail(log: &LogRecord) -> String {
    format!(
        "User: {}\nTimestamp: {}\n\n{}",
        log.user_id, log.log_timestamp, log.log_content
    )
}
