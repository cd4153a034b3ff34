//! Navigation, boot and the per-view loaders.

use std::future::Future;

use super::{App, AppMessage, StatusLine};
use crate::api::AdminApiClient;
use crate::error::ApiError;
use crate::request::Channel;
use crate::view_state::View;

impl App {
    /// Load the user list, then the current view.
    pub fn boot(&mut self) {
        self.booting = true;
        self.set_status(StatusLine::info("Connecting..."));
        let ticket = self.requests.issue(Channel::Users);
        self.spawn_request(move |api| async move {
            AppMessage::UsersLoaded {
                ticket,
                result: api.users().await,
            }
        });
    }

    /// Switch views and load the new one.
    ///
    /// Re-entering the current view reloads it. Leaving Crashes or Visuals
    /// releases their charts and makes their in-flight fetches stale.
    pub fn navigate(&mut self, view: View) {
        let previous = self.router.navigate(view);
        self.leave(previous);
        self.refresh_current();
    }

    pub fn next_view(&mut self) {
        let next = self.router.current().next();
        self.navigate(next);
    }

    pub fn prev_view(&mut self) {
        let prev = self.router.current().prev();
        self.navigate(prev);
    }

    /// Reload the current view from scratch.
    pub fn refresh_current(&mut self) {
        self.mark_dirty();
        self.requests.invalidate(Channel::View);
        match self.router.current() {
            View::Overview => self.load_overview(),
            View::Sessions => self.load_sessions(),
            View::Logs => self.load_logs(),
            View::Crashes => self.open_crashes(),
            View::Visuals => self.open_visuals(),
        }
    }

    /// Step the user filter and reload. Ignored where the filter is hidden.
    pub fn cycle_user(&mut self, forward: bool) {
        if !self.router.user_filter().is_visible() {
            return;
        }
        self.router.user_filter_mut().cycle(forward);
        tracing::info!(user = self.router.user(), "user filter changed");
        self.refresh_current();
    }

    fn leave(&mut self, view: View) {
        match view {
            View::Crashes => {
                self.requests.invalidate(Channel::CrashSearch);
                self.crashes.close();
            }
            View::Visuals => {
                self.requests.invalidate(Channel::Charts);
                self.visuals.close();
            }
            View::Overview | View::Sessions | View::Logs => {}
        }
    }

    fn load_overview(&mut self) {
        let ticket = self.requests.issue(Channel::View);
        self.spawn_request(move |api| async move {
            AppMessage::OverviewLoaded {
                ticket,
                result: api.overview().await,
            }
        });
    }

    fn load_sessions(&mut self) {
        let ticket = self.requests.issue(Channel::View);
        let user = self.router.user().to_string();
        self.spawn_request(move |api| async move {
            AppMessage::SessionsLoaded {
                ticket,
                result: api.sessions(&user).await,
            }
        });
    }

    fn load_logs(&mut self) {
        let ticket = self.requests.issue(Channel::View);
        let user = self.router.user().to_string();
        self.spawn_request(move |api| async move {
            AppMessage::LogsLoaded {
                ticket,
                result: api.logs(&user).await,
            }
        });
    }

    /// Run `task` on the runtime and post its message back to the loop.
    pub(super) fn spawn_request<F, Fut>(&mut self, task: F)
    where
        F: FnOnce(AdminApiClient) -> Fut,
        Fut: Future<Output = AppMessage> + Send + 'static,
    {
        self.requests.started();
        let tx = self.message_tx.clone();
        let fut = task(self.api.clone());
        tokio::spawn(async move {
            let _ = tx.send(fut.await);
        });
    }

    /// A view (or the boot sequence) finished loading.
    pub(super) fn view_loaded(&mut self) {
        if self.booting {
            self.booting = false;
            self.set_status(StatusLine::info("Connected."));
        }
    }

    /// Surface an API failure in the status line.
    pub(super) fn report_error(&mut self, err: &ApiError) {
        tracing::warn!(code = err.error_code(), %err, "request failed");
        self.booting = false;
        self.set_status(StatusLine::error(format!("Error: {}", err)));
    }
}
