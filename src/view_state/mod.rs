//! Per-view state owned by the [`App`](crate::app::App).
//!
//! - [`Router`] / [`View`] - current view and the shared user filter
//! - [`RowsView`] - Sessions and Logs tables
//! - [`CrashesState`] - crash search inputs, results and summary chart
//! - [`VisualsState`] - date range and the eleven charts
//! - [`ConfigPanel`] - API URL / token editor
//!
//! Nothing here performs I/O. The app layer dispatches fetches and feeds the
//! results back through these types; the UI only reads them.

mod config_panel;
pub mod crashes;
mod router;
mod selection;
pub mod tables;
pub mod visuals;

pub use config_panel::{ConfigField, ConfigPanel};
pub use crashes::{CrashField, CrashInputs, CrashesState};
pub use router::{Router, UserFilter, View};
pub use selection::Selection;
pub use tables::RowsView;
pub use visuals::{ChartStatus, DateField, VisualsState};
