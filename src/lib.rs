//! trackdeck - a terminal operator console for fleet telemetry.
//!
//! Browses sessions, logs and crash events served by an admin HTTP API,
//! with a debounced crash search, chart views and CSV export. The library
//! exposes every layer for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod models;
pub mod request;
pub mod surface;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
