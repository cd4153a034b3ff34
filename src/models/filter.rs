//! Typed request filters.
//!
//! Each view that narrows its data owns one of these and hands it to the API
//! client by reference. Blank values are never sent.

use chrono::{Duration, NaiveDate};

use crate::format::format_iso_date;

/// Number of days, today included, covered by the default Visuals range.
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Filters for `/admin/crashes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrashQuery {
    pub user: String,
    pub query: String,
    pub exception_code: String,
    pub faulting_module: String,
}

impl CrashQuery {
    /// Query parameters in wire order, trimmed, blanks omitted.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("user", self.user.as_str()),
            ("q", self.query.as_str()),
            ("exception_code", self.exception_code.as_str()),
            ("faulting_module", self.faulting_module.as_str()),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.trim()))
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// `[("user", u)]`, or nothing for a blank user.
pub fn user_params(user: &str) -> Vec<(&'static str, &str)> {
    let user = user.trim();
    if user.is_empty() {
        Vec::new()
    } else {
        vec![("user", user)]
    }
}

/// Visuals date range as typed by the operator.
///
/// The values are forwarded as-is; a `from` after `to` is the data
/// service's problem, not ours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

impl DateRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The `days`-day window ending on `today`, both ends inclusive.
    pub fn trailing_days(today: NaiveDate, days: i64) -> Self {
        let start = today - Duration::days((days - 1).max(0));
        Self::new(format_iso_date(start), format_iso_date(today))
    }

    /// Default range: the trailing 30 days ending on `today`.
    pub fn default_for(today: NaiveDate) -> Self {
        Self::trailing_days(today, DEFAULT_RANGE_DAYS)
    }

    /// Default range relative to the local clock.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [("from", self.from.as_str()), ("to", self.to.as_str())]
            .into_iter()
            .map(|(k, v)| (k, v.trim()))
            .filter(|(_, v)| !v.is_empty())
            .collect()
    }
}
