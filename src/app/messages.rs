//! AppMessage enum for async communication within the application.

use serde_json::Value;

use crate::debounce::DebounceToken;
use crate::error::ApiError;
use crate::models::{ChartMetric, CrashRecord, CrashSignature, LogRecord, Overview, SessionRecord};
use crate::request::Ticket;

/// Crash list plus signature summary from one search.
pub type CrashResults = (Vec<CrashRecord>, Vec<CrashSignature>);

/// Results of background work, applied one at a time by the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Distinct user ids for the user filter
    UsersLoaded {
        ticket: Ticket,
        result: Result<Vec<String>, ApiError>,
    },
    /// Overview KPIs and latest rows
    OverviewLoaded {
        ticket: Ticket,
        result: Result<Overview, ApiError>,
    },
    SessionsLoaded {
        ticket: Ticket,
        result: Result<Vec<SessionRecord>, ApiError>,
    },
    LogsLoaded {
        ticket: Ticket,
        result: Result<Vec<LogRecord>, ApiError>,
    },
    /// Crash search finished (list, then summary)
    CrashesLoaded {
        ticket: Ticket,
        result: Result<CrashResults, ApiError>,
    },
    /// One Visuals chart fetched
    ChartLoaded {
        ticket: Ticket,
        metric: ChartMetric,
        result: Result<Value, ApiError>,
    },
    /// The crash search debounce timer elapsed
    DebounceElapsed { token: DebounceToken },
}
