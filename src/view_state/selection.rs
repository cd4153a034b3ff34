//! Single-row selection over a list.

/// Index of the one selected row, if any. Selecting a row replaces the
/// previous selection, so at most one row is ever selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    /// Select `index` if it is within `len`; returns whether it was.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.index = Some(index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Move down one row; the first press selects the first row.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(match self.index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move up one row; the first press selects the first row.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.index = None;
            return;
        }
        self.index = Some(self.index.map(|i| i.saturating_sub(1)).unwrap_or(0));
    }
}
