//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// Nothing in the console retries automatically; the category only decides
/// where an error ends up (status line, per-chart placeholder, or the log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Data service unreachable or response unreadable.
    Transport,

    /// Missing or rejected admin token (HTTP 401/403).
    Auth,

    /// Any other non-2xx answer from the data service.
    Server,

    /// A chart target was not mounted when its data arrived.
    Render,

    /// A response did not have the expected shape.
    Data,

    /// Local filesystem problems (exports, config file).
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Render => "render",
            ErrorCategory::Data => "data",
            ErrorCategory::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ErrorCategory::Server.to_string(), "server");
        assert_eq!(ErrorCategory::Render.as_str(), "render");
    }
}
