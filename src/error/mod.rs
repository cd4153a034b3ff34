//! Error handling for the console.
//!
//! | Type | Raised by | Ends up in |
//! |------|-----------|------------|
//! | [`ApiError`] | admin API client | status line, verbatim |
//! | [`RenderError::TargetMissing`] | surface registry | log only |
//! | [`RenderError::DataShape`] | chart transforms | per-chart placeholder |
//! | [`ExportError`] | CSV/HTML export | status line |
//!
//! [`ConsoleError`] unifies them for callers that do not care which layer
//! failed. No error is ever retried automatically.

mod api;
mod category;
mod render;

pub use api::ApiError;
pub use category::ErrorCategory;
pub use render::RenderError;

use std::path::PathBuf;
use thiserror::Error;

/// Failure to materialise an export file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing loaded to export")]
    NothingLoaded,

    #[error("failed to encode CSV: {0}")]
    Encode(#[from] csv::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load or persist the console configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any error the console can produce.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ConsoleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConsoleError::Api(e) => e.category(),
            ConsoleError::Render(e) => e.category(),
            ConsoleError::Export(_) | ConsoleError::Config(_) => ErrorCategory::System,
        }
    }
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
