//! Application state and logic for the console.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`AppMessage`] - results of background fetches and timers
//! - [`StatusLine`] - the one-line operator status
//!
//! All state lives on the event loop. Fetches run in spawned tokio tasks and
//! report back through `message_tx`; every result carries a ticket and is
//! dropped if a newer request superseded it.

mod crashes;
mod exports;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod settings;
mod visuals;

pub use messages::{AppMessage, CrashResults};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::AdminApiClient;
use crate::config::{ConfigStore, ConsoleConfig, SharedConfig};
use crate::models::{LogRecord, Overview, SessionRecord};
use crate::request::RequestTracker;
use crate::surface::SurfacePool;
use crate::traits::HttpClient;
use crate::view_state::{ConfigPanel, CrashesState, Router, RowsView, VisualsState};

/// The operator-facing status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct App {
    /// Current view and the shared user filter
    pub router: Router,
    /// Overview payload of the last load
    pub overview: Option<Overview>,
    pub sessions: RowsView<SessionRecord>,
    pub logs: RowsView<LogRecord>,
    pub crashes: CrashesState,
    pub visuals: VisualsState,
    pub config_panel: ConfigPanel,
    pub status: StatusLine,
    /// Admin API client (reads `config` on every call)
    pub api: AdminApiClient,
    pub config: SharedConfig,
    /// Where the config panel persists to; `None` keeps changes in memory
    pub config_store: Option<ConfigStore>,
    pub requests: RequestTracker,
    /// Pool every chart surface is taken from
    pub pool: SurfacePool,
    /// Set between a boot and the first completed view load
    pub booting: bool,
    pub should_quit: bool,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Console backed by reqwest.
    pub fn new(config: ConsoleConfig, config_store: Option<ConfigStore>) -> Self {
        let shared = SharedConfig::new(config);
        let api = AdminApiClient::with_reqwest(shared.clone());
        Self::with_api(api, SurfacePool::new(), config_store)
    }

    /// Console over an arbitrary transport (tests, alternate backends).
    pub fn with_http(http: Arc<dyn HttpClient>, config: ConsoleConfig, pool: SurfacePool) -> Self {
        let api = AdminApiClient::new(http, SharedConfig::new(config));
        Self::with_api(api, pool, None)
    }

    fn with_api(api: AdminApiClient, pool: SurfacePool, config_store: Option<ConfigStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let config = api.config().clone();
        let hint = config.snapshot().hint().to_string();

        Self {
            router: Router::new(),
            overview: None,
            sessions: RowsView::default(),
            logs: RowsView::default(),
            crashes: CrashesState::new(pool.clone()),
            visuals: VisualsState::new(pool.clone()),
            config_panel: ConfigPanel {
                hint: hint.clone(),
                ..Default::default()
            },
            status: StatusLine::info(hint),
            api,
            config,
            config_store,
            requests: RequestTracker::new(),
            pool,
            booting: false,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// True while any fetch started by the console has not come back.
    pub fn is_loading(&self) -> bool {
        !self.requests.is_idle()
    }

    /// True when nothing is loading and no search is waiting on its timer.
    pub fn is_idle(&self) -> bool {
        !self.is_loading() && !self.crashes.debouncer.is_pending()
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = status;
        self.mark_dirty();
    }

    /// Apply every message already queued. Returns how many were handled.
    pub fn drain_messages(&mut self) -> usize {
        let Some(mut rx) = self.message_rx.take() else {
            return 0;
        };
        let mut handled = 0;
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
            handled += 1;
        }
        self.message_rx = Some(rx);
        handled
    }

    /// Handle messages until every fetch and pending timer has resolved.
    ///
    /// Only usable while the receiver is still owned by the app, i.e. outside
    /// the terminal event loop.
    pub async fn run_until_idle(&mut self) {
        let Some(mut rx) = self.message_rx.take() else {
            return;
        };
        while !self.is_idle() {
            match rx.recv().await {
                Some(msg) => self.handle_message(msg),
                None => break,
            }
        }
        while let Ok(msg) = rx.try_recv() {
            self.handle_message(msg);
        }
        self.message_rx = Some(rx);
    }
}
