//! Connection settings panel.

use super::{App, StatusLine};
use crate::config::ConsoleConfig;

impl App {
    pub fn open_config_panel(&mut self) {
        let config = self.config.snapshot();
        self.config_panel.open_with(&config);
        self.mark_dirty();
    }

    pub fn cancel_config_panel(&mut self) {
        self.config_panel.close();
        self.mark_dirty();
    }

    /// Apply the edited URL and token, persist them, and boot again.
    ///
    /// Only the edited fields are written over the stored file, so values
    /// that came from `TRACKDECK_*` overrides stay out of it. A failed write
    /// still applies the values for this session.
    pub fn save_config(&mut self) {
        let updated = self.config_panel.apply_to(&self.config.snapshot());
        self.config.replace(updated.clone());
        self.config_panel.close();

        if let Some(store) = &self.config_store {
            let stored = store.load().unwrap_or_else(|err| {
                tracing::warn!(%err, "stored config unreadable, rewriting it");
                ConsoleConfig::default()
            });
            if let Err(err) = store.save(&self.config_panel.apply_to(&stored)) {
                tracing::warn!(%err, "failed to persist config");
                self.config_panel.hint = updated.hint().to_string();
                self.boot();
                self.set_status(StatusLine::error(format!("Error: {}", err)));
                return;
            }
        }

        tracing::info!(api_url = %updated.api_url, has_token = updated.has_token(), "config saved");
        self.config_panel.hint = "Saved.".to_string();
        self.boot();
    }
}
