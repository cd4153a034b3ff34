//! Data model for the admin API.
//!
//! - [`records`] - session, log, crash and signature rows
//! - [`chart`] - the fixed chart metrics and their transforms
//! - [`filter`] - typed request filters

pub mod chart;
pub mod filter;
pub mod records;

pub use chart::{ChartGroup, ChartKind, ChartMetric, ChartSeries};
pub use filter::{user_params, CrashQuery, DateRange};
pub use records::{
    value_to_f64, value_to_text, CrashBrief, CrashRecord, CrashSignature, LogRecord, Overview,
    SessionRecord,
};
