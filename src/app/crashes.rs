//! Crash search pipeline.
//!
//! Keystrokes in the three search inputs restart one shared debounce timer;
//! only when it elapses is a search issued. Apply and Clear search at once
//! and cancel whatever timer was pending.

use super::{App, AppMessage};
use crate::request::Channel;

impl App {
    /// Fresh Crashes view and an unfiltered search.
    pub(super) fn open_crashes(&mut self) {
        self.requests.invalidate(Channel::CrashSearch);
        self.crashes.open();
        self.load_crashes();
    }

    /// Fetch the crash list for the current inputs, then the summary for
    /// the current user. Any older search in flight becomes stale.
    pub fn load_crashes(&mut self) {
        let ticket = self.requests.issue(Channel::CrashSearch);
        let query = self.crashes.query_for(self.router.user());
        tracing::debug!(?query, "crash search");

        self.spawn_request(move |api| async move {
            let result = match api.crashes(&query).await {
                Ok(list) => api
                    .crash_summary(&query.user)
                    .await
                    .map(|summary| (list, summary)),
                Err(err) => Err(err),
            };
            AppMessage::CrashesLoaded { ticket, result }
        });
    }

    /// Restart the debounce timer after an input changed.
    fn crash_input_changed(&mut self) {
        let tx = self.message_tx.clone();
        self.crashes
            .debouncer
            .schedule(&tx, |token| AppMessage::DebounceElapsed { token });
    }

    /// Type into the focused search input.
    pub fn type_crash_char(&mut self, c: char) {
        if self.crashes.input_char(c) {
            self.crash_input_changed();
        }
    }

    pub fn crash_backspace(&mut self) {
        if self.crashes.backspace() {
            self.crash_input_changed();
        }
    }

    /// Search now with the current inputs.
    pub fn apply_crash_filters(&mut self) {
        self.crashes.debouncer.cancel();
        self.load_crashes();
    }

    /// Empty all three inputs and search now.
    pub fn clear_crash_filters(&mut self) {
        self.crashes.inputs.clear();
        self.crashes.debouncer.cancel();
        self.load_crashes();
    }

    /// The debounce timer for `token` elapsed.
    pub(super) fn crash_debounce_elapsed(&mut self, token: crate::debounce::DebounceToken) {
        if !self.crashes.debouncer.fire(token) {
            tracing::trace!("ignoring superseded debounce");
            return;
        }
        if self.router.current() == crate::view_state::View::Crashes {
            self.load_crashes();
        }
    }
}
