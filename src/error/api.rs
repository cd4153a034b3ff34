//! Errors produced by the admin API client.

use std::fmt;

use super::ErrorCategory;
use crate::traits::HttpError;

/// Failure of a single admin API read.
///
/// `Display` is what the operator sees in the status line. For a non-2xx
/// answer it is the status code followed by the raw response body, unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The data service could not be reached or the body could not be read.
    Transport { url: String, message: String },

    /// The data service answered with a non-2xx status.
    Status { status: u16, body: String },

    /// The body was not valid JSON, or not the JSON shape the caller needs.
    Decode { path: String, message: String },
}

impl ApiError {
    pub(crate) fn transport(url: &str, err: HttpError) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// True for 401/403, i.e. a missing or wrong admin token.
    pub fn is_authorization(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// HTTP status, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport { .. } => ErrorCategory::Transport,
            ApiError::Status { .. } if self.is_authorization() => ErrorCategory::Auth,
            ApiError::Status { .. } => ErrorCategory::Server,
            ApiError::Decode { .. } => ErrorCategory::Data,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "E_API_TRANSPORT",
            ApiError::Status { .. } if self.is_authorization() => "E_API_AUTH",
            ApiError::Status { .. } => "E_API_STATUS",
            ApiError::Decode { .. } => "E_API_DECODE",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { url, message } => write!(f, "{} ({})", message, url),
            ApiError::Status { status, body } => write!(f, "{} {}", status, body),
            ApiError::Decode { path, message } => {
                write!(f, "Invalid response from {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_is_status_then_body() {
        let err = ApiError::Status {
            status: 401,
            body: "{\"error\":\"Unauthorized\"}".to_string(),
        };
        assert_eq!(err.to_string(), "401 {\"error\":\"Unauthorized\"}");
    }

    #[test]
    fn test_authorization_detection() {
        for status in [401, 403] {
            let err = ApiError::Status {
                status,
                body: String::new(),
            };
            assert!(err.is_authorization());
            assert_eq!(err.category(), ErrorCategory::Auth);
            assert_eq!(err.error_code(), "E_API_AUTH");
        }

        let server = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(!server.is_authorization());
        assert_eq!(server.category(), ErrorCategory::Server);
        assert_eq!(server.status(), Some(500));
    }

    #[test]
    fn test_transport_from_http_error() {
        let err = ApiError::transport(
            "http://127.0.0.1:5001/admin/users",
            HttpError::ConnectionFailed("refused".to_string()),
        );
        assert_eq!(err.category(), ErrorCategory::Transport);
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("refused"));
    }
}
