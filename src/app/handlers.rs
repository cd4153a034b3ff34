//! Message handling for the App.

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    /// Results whose ticket was superseded are dropped without touching state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::UsersLoaded { ticket, result } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                match result {
                    Ok(users) => {
                        tracing::info!(count = users.len(), "loaded users");
                        self.router.user_filter_mut().set_options(users);
                        self.refresh_current();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::OverviewLoaded { ticket, result } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                match result {
                    Ok(overview) => {
                        self.overview = Some(overview);
                        self.view_loaded();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::SessionsLoaded { ticket, result } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                match result {
                    Ok(rows) => {
                        tracing::debug!(rows = rows.len(), "sessions loaded");
                        self.sessions.replace(rows);
                        self.view_loaded();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::LogsLoaded { ticket, result } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                match result {
                    Ok(rows) => {
                        tracing::debug!(rows = rows.len(), "logs loaded");
                        self.logs.replace(rows);
                        self.view_loaded();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::CrashesLoaded { ticket, result } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                match result {
                    Ok((list, summary)) => {
                        tracing::debug!(
                            crashes = list.len(),
                            signatures = summary.len(),
                            "crash search finished"
                        );
                        self.crashes.apply_results(list, summary);
                        self.view_loaded();
                    }
                    Err(err) => self.report_error(&err),
                }
            }
            AppMessage::ChartLoaded {
                ticket,
                metric,
                result,
            } => {
                if !self.requests.complete(ticket) {
                    return;
                }
                // A failed chart shows its own placeholder; the rest still render.
                // During boot the first chart to answer also settles the status line.
                let boot_error = match &result {
                    Err(err) if self.booting => Some(err.clone()),
                    _ => None,
                };
                let ok = result.is_ok();
                self.visuals.apply_chart(metric, result);
                if ok {
                    self.view_loaded();
                } else if let Some(err) = boot_error {
                    self.report_error(&err);
                }
            }
            AppMessage::DebounceElapsed { token } => {
                self.crash_debounce_elapsed(token);
            }
        }
    }
}
