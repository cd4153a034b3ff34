//! Errors raised while turning fetched data into chart surfaces.

use thiserror::Error;

use super::ErrorCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The chart's target slot was not mounted when the data arrived.
    #[error("render target '{target}' for chart '{key}' is not mounted")]
    TargetMissing { key: String, target: String },

    /// The response could not be turned into labels/values at all.
    #[error("unexpected data for chart '{metric}': {message}")]
    DataShape { metric: String, message: String },
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::TargetMissing { .. } => ErrorCategory::Render,
            RenderError::DataShape { .. } => ErrorCategory::Data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display_and_category() {
        let missing = RenderError::TargetMissing {
            key: "daily_users".to_string(),
            target: "ch_daily_users".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Render);
        assert!(missing.to_string().contains("ch_daily_users"));

        let shape = RenderError::DataShape {
            metric: "crashes_daily".to_string(),
            message: "expected an array".to_string(),
        };
        assert_eq!(shape.category(), ErrorCategory::Data);
    }
}
