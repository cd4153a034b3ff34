//! The eleven fixed chart metrics and their response transforms.

use serde_json::Value;

use super::records::{value_to_f64, value_to_text};
use crate::error::RenderError;
use crate::format::pad_hour;

/// How a metric is drawn. Fixed per metric, not operator-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Line => "Line chart",
            ChartKind::Pie => "Pie chart",
        }
    }
}

/// Which section of the Visuals view a chart belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartGroup {
    Sessions,
    Crashes,
}

/// Labels and values ready for a chart builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Label/value pairs, truncated to the shorter of the two vectors.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMetric {
    SessionsPerUser,
    SessionDurationDaily,
    ActivityHourly,
    DailyUsers,
    WeeklyUsers,
    NewVsReturning,
    CrashesDaily,
    CrashesHourly,
    CrashesByModule,
    CrashesByException,
    CrashesTopSignatures,
}

impl ChartMetric {
    /// Every metric, in display order.
    pub const ALL: [ChartMetric; 11] = [
        ChartMetric::SessionsPerUser,
        ChartMetric::SessionDurationDaily,
        ChartMetric::ActivityHourly,
        ChartMetric::DailyUsers,
        ChartMetric::WeeklyUsers,
        ChartMetric::NewVsReturning,
        ChartMetric::CrashesDaily,
        ChartMetric::CrashesHourly,
        ChartMetric::CrashesByModule,
        ChartMetric::CrashesByException,
        ChartMetric::CrashesTopSignatures,
    ];

    /// Path segment under `/admin/charts/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ChartMetric::SessionsPerUser => "sessions_per_user",
            ChartMetric::SessionDurationDaily => "session_duration_daily",
            ChartMetric::ActivityHourly => "activity_hourly",
            ChartMetric::DailyUsers => "daily_users",
            ChartMetric::WeeklyUsers => "weekly_users",
            ChartMetric::NewVsReturning => "new_vs_returning",
            ChartMetric::CrashesDaily => "crashes_daily",
            ChartMetric::CrashesHourly => "crashes_hourly",
            ChartMetric::CrashesByModule => "crashes_by_module",
            ChartMetric::CrashesByException => "crashes_by_exception",
            ChartMetric::CrashesTopSignatures => "crashes_top_signatures",
        }
    }

    /// Registry key of the chart instance.
    pub fn key(&self) -> &'static str {
        match self {
            ChartMetric::SessionDurationDaily => "duration_daily",
            ChartMetric::CrashesTopSignatures => "crashes_signatures",
            other => other.endpoint(),
        }
    }

    /// Id of the target slot the chart draws into.
    pub fn target(&self) -> &'static str {
        match self {
            ChartMetric::SessionsPerUser => "ch_sessions_per_user",
            ChartMetric::SessionDurationDaily => "ch_duration_daily",
            ChartMetric::ActivityHourly => "ch_activity_hourly",
            ChartMetric::DailyUsers => "ch_daily_users",
            ChartMetric::WeeklyUsers => "ch_weekly_users",
            ChartMetric::NewVsReturning => "ch_new_vs_returning",
            ChartMetric::CrashesDaily => "ch_crashes_daily",
            ChartMetric::CrashesHourly => "ch_crashes_hourly",
            ChartMetric::CrashesByModule => "ch_crashes_module",
            ChartMetric::CrashesByException => "ch_crashes_exception",
            ChartMetric::CrashesTopSignatures => "ch_crashes_signatures",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::SessionsPerUser => "Total sessions per user",
            ChartMetric::SessionDurationDaily => "Session duration over time",
            ChartMetric::ActivityHourly => "User activity per hour",
            ChartMetric::DailyUsers => "Daily user trend",
            ChartMetric::WeeklyUsers => "Weekly user trend",
            ChartMetric::NewVsReturning => "New vs Returning users",
            ChartMetric::CrashesDaily => "Crashes per day",
            ChartMetric::CrashesHourly => "Crashes per hour",
            ChartMetric::CrashesByModule => "Crashes by module",
            ChartMetric::CrashesByException => "Crashes by exception",
            ChartMetric::CrashesTopSignatures => "Top crash signatures",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ChartMetric::SessionsPerUser => "number of sessions by user",
            ChartMetric::SessionDurationDaily => "total session hours per day",
            ChartMetric::ActivityHourly => "sessions by hour of day",
            ChartMetric::DailyUsers => "active users per day",
            ChartMetric::WeeklyUsers => "active users per week",
            ChartMetric::NewVsReturning => "users first seen in range vs returning",
            ChartMetric::CrashesDaily => "crashes by day",
            ChartMetric::CrashesHourly => "crashes by hour of day",
            ChartMetric::CrashesByModule => "top faulting modules",
            ChartMetric::CrashesByException => "top exception codes",
            ChartMetric::CrashesTopSignatures => "top grouped crash signatures",
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartMetric::SessionDurationDaily
            | ChartMetric::DailyUsers
            | ChartMetric::CrashesDaily => ChartKind::Line,
            ChartMetric::NewVsReturning => ChartKind::Pie,
            _ => ChartKind::Bar,
        }
    }

    pub fn group(&self) -> ChartGroup {
        match self {
            ChartMetric::SessionsPerUser
            | ChartMetric::SessionDurationDaily
            | ChartMetric::ActivityHourly
            | ChartMetric::DailyUsers
            | ChartMetric::WeeklyUsers
            | ChartMetric::NewVsReturning => ChartGroup::Sessions,
            _ => ChartGroup::Crashes,
        }
    }

    /// `(label field, value field)` of each row for array-shaped metrics.
    fn row_fields(&self) -> Option<(&'static str, &'static str)> {
        match self {
            ChartMetric::SessionsPerUser => Some(("user_id", "sessions")),
            ChartMetric::SessionDurationDaily => Some(("day", "hours")),
            ChartMetric::ActivityHourly => Some(("hour", "sessions")),
            ChartMetric::DailyUsers => Some(("day", "active_users")),
            ChartMetric::WeeklyUsers => Some(("week", "active_users")),
            ChartMetric::NewVsReturning => None,
            ChartMetric::CrashesDaily => Some(("day", "crashes")),
            ChartMetric::CrashesHourly => Some(("hour", "crashes")),
            ChartMetric::CrashesByModule => Some(("module", "crashes")),
            ChartMetric::CrashesByException => Some(("exception", "crashes")),
            ChartMetric::CrashesTopSignatures => Some(("signature", "crashes")),
        }
    }

    fn is_hourly(&self) -> bool {
        matches!(self, ChartMetric::ActivityHourly | ChartMetric::CrashesHourly)
    }

    /// Turn a chart response into labels and values.
    ///
    /// Missing or non-numeric values count as zero and missing labels are
    /// empty; only a response of the wrong overall shape is an error.
    pub fn series_from(&self, value: &Value) -> Result<ChartSeries, RenderError> {
        let Some((label_field, value_field)) = self.row_fields() else {
            return self.split_series(value);
        };

        let rows = value.as_array().ok_or_else(|| self.shape_error("expected an array"))?;
        let mut series = ChartSeries::default();
        for row in rows {
            let label = row.get(label_field).map(value_to_text).unwrap_or_default();
            let label = if self.is_hourly() { pad_hour(&label) } else { label };
            let number = row.get(value_field).and_then(value_to_f64).unwrap_or(0.0);
            series.labels.push(label);
            series.values.push(number);
        }
        Ok(series)
    }

    fn split_series(&self, value: &Value) -> Result<ChartSeries, RenderError> {
        let object = value
            .as_object()
            .ok_or_else(|| self.shape_error("expected an object"))?;
        let count = |field: &str| object.get(field).and_then(value_to_f64).unwrap_or(0.0);
        Ok(ChartSeries::new(
            vec!["New Users".to_string(), "Returning Users".to_string()],
            vec![count("new_users"), count("returning_users")],
        ))
    }

    fn shape_error(&self, message: &str) -> RenderError {
        RenderError::DataShape {
            metric: self.endpoint().to_string(),
            message: message.to_string(),
        }
    }
}
