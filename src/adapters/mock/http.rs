//! Mock HTTP client for testing.
//!
//! Responses are matched on the URL path (query string stripped) so tests can
//! script an endpoint once and inspect the exact query strings the pipelines
//! produced through [`MockHttpClient::get_requests`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Full request URL, including query string
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

impl RecordedRequest {
    /// URL without the query string.
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }

    /// The raw query string, empty when there is none.
    pub fn query(&self) -> &str {
        self.url.split_once('?').map(|(_, q)| q).unwrap_or("")
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_json("http://api/admin/users", serde_json::json!(["alice"]));
/// let response = client.get("http://api/admin/users", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses keyed by URL without query string
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (query string ignored when matching).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let key = url.split('?').next().unwrap_or(url).to_string();
        self.responses.lock().unwrap().insert(key, response);
    }

    /// Shorthand for a 200 JSON response.
    pub fn set_json(&self, url: &str, value: serde_json::Value) {
        self.set_response(url, MockResponse::Success(Response::json_ok(&value)));
    }

    /// Shorthand for a non-2xx response with a text body.
    pub fn set_status(&self, url: &str, status: u16, body: &str) {
        self.set_response(
            url,
            MockResponse::Success(Response::new(status, bytes::Bytes::from(body.to_string()))),
        );
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests whose path ends with `suffix`.
    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|r| r.path().ends_with(suffix))
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, url: &str, headers: &Headers) {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let key = url.split('?').next().unwrap_or(url);
        if let Some(response) = self.responses.lock().unwrap().get(key) {
            return Some(response.clone());
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_matches_ignoring_query() {
        let client = MockHttpClient::new();
        client.set_json("http://api/admin/sessions", serde_json::json!([]));

        let response = client
            .get("http://api/admin/sessions?user=alice", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let requests = client.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path(), "http://api/admin/sessions");
        assert_eq!(requests[0].query(), "user=alice");
    }

    #[tokio::test]
    async fn test_unmatched_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://api/missing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_default_response_and_status() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "down".to_string(),
        )));
        client.set_status("http://api/admin/users", 401, "Unauthorized");

        let unauthorized = client
            .get("http://api/admin/users", &Headers::new())
            .await
            .unwrap();
        assert_eq!(unauthorized.status, 401);

        let down = client.get("http://api/admin/logs", &Headers::new()).await;
        assert!(matches!(down, Err(HttpError::ConnectionFailed(_))));
        assert_eq!(client.requests_to("/admin/logs").len(), 1);
    }
}
