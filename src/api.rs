//! Admin API client.
//!
//! Every call is a read. The base URL and token are taken from the shared
//! configuration at call time, never cached, so a config change applies to
//! the very next request.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::SharedConfig;
use crate::error::ApiError;
use crate::models::{
    user_params, ChartMetric, CrashQuery, CrashRecord, CrashSignature, DateRange, LogRecord,
    Overview, SessionRecord,
};
use crate::traits::{Headers, HttpClient};

/// Header the data service authenticates with.
pub const TOKEN_HEADER: &str = "X-Admin-Token";

/// Build `?k=v&k2=v2` with percent-encoded values, or `""` when empty.
pub fn query_string(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let joined = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{}", joined)
}

/// Client for the `/admin/*` endpoints.
#[derive(Clone)]
pub struct AdminApiClient {
    http: Arc<dyn HttpClient>,
    config: SharedConfig,
}

impl std::fmt::Debug for AdminApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AdminApiClient {
    pub fn new(http: Arc<dyn HttpClient>, config: SharedConfig) -> Self {
        Self { http, config }
    }

    /// Client backed by reqwest.
    pub fn with_reqwest(config: SharedConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// GET `path` (which may carry a query string) and parse the JSON body.
    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.get_as(path).await
    }

    async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let config = self.config.snapshot();
        let url = format!("{}{}", config.base_url(), path);

        let mut headers = Headers::new();
        headers.insert(TOKEN_HEADER.to_string(), config.token.clone());
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token),
        );
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(%url, "admin api request");
        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|e| ApiError::transport(&url, e))?;

        if !response.is_success() {
            let err = ApiError::Status {
                status: response.status,
                body: response.text_lossy(),
            };
            tracing::warn!(%url, code = err.error_code(), "admin api request failed");
            return Err(err);
        }

        response.json().map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Distinct user ids.
    pub async fn users(&self) -> Result<Vec<String>, ApiError> {
        let values: Vec<Value> = self.get_as("/admin/users").await?;
        Ok(values
            .iter()
            .map(crate::models::value_to_text)
            .filter(|u| !u.is_empty())
            .collect())
    }

    pub async fn overview(&self) -> Result<Overview, ApiError> {
        self.get_as("/admin/overview").await
    }

    pub async fn sessions(&self, user: &str) -> Result<Vec<SessionRecord>, ApiError> {
        let path = format!("/admin/sessions{}", query_string(&user_params(user)));
        self.get_as(&path).await
    }

    pub async fn logs(&self, user: &str) -> Result<Vec<LogRecord>, ApiError> {
        let path = format!("/admin/logs{}", query_string(&user_params(user)));
        self.get_as(&path).await
    }

    /// Crash rows matching every non-blank field of `query`.
    pub async fn crashes(&self, query: &CrashQuery) -> Result<Vec<CrashRecord>, ApiError> {
        let path = format!("/admin/crashes{}", query_string(&query.params()));
        self.get_as(&path).await
    }

    /// Grouped signatures for `user`, ignoring any search terms.
    pub async fn crash_summary(&self, user: &str) -> Result<Vec<CrashSignature>, ApiError> {
        let path = format!("/admin/crashes/summary{}", query_string(&user_params(user)));
        self.get_as(&path).await
    }

    /// Raw JSON for one chart metric; shaping happens in the model layer.
    pub async fn chart(&self, metric: ChartMetric, range: &DateRange) -> Result<Value, ApiError> {
        let path = format!(
            "/admin/charts/{}{}",
            metric.endpoint(),
            query_string(&range.params())
        );
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::config::ConsoleConfig;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://admin.test";

    fn client_with(mock: &MockHttpClient, token: &str) -> AdminApiClient {
        let config = SharedConfig::new(ConsoleConfig {
            api_url: format!("{}/", BASE),
            token: token.to_string(),
            export_dir: None,
        });
        AdminApiClient::new(Arc::new(mock.clone()), config)
    }

    #[test]
    fn test_query_string_encodes_values() {
        assert_eq!(query_string(&[]), "");
        assert_eq!(
            query_string(&[("q", "a b&c"), ("user", "bob")]),
            "?q=a%20b%26c&user=bob"
        );
    }

    #[tokio::test]
    async fn test_get_attaches_token_headers() {
        let mock = MockHttpClient::new();
        mock.set_json(&format!("{}/admin/users", BASE), json!(["alice", "bob", null]));
        let client = client_with(&mock, "tok");

        let users = client.users().await.unwrap();
        assert_eq!(users, vec!["alice", "bob"]);

        let requests = mock.get_requests();
        assert_eq!(requests[0].url, "http://admin.test/admin/users");
        assert_eq!(requests[0].headers.get(TOKEN_HEADER).unwrap(), "tok");
        assert_eq!(requests[0].headers.get("Authorization").unwrap(), "Bearer tok");
    }

    #[tokio::test]
    async fn test_non_success_keeps_status_and_body() {
        let mock = MockHttpClient::new();
        mock.set_status(&format!("{}/admin/overview", BASE), 401, "Unauthorized");
        let client = client_with(&mock, "");

        let err = client.overview().await.unwrap_err();
        assert_eq!(err.to_string(), "401 Unauthorized");
        assert!(err.is_authorization());
    }

    #[tokio::test]
    async fn test_transport_and_decode_errors() {
        let mock = MockHttpClient::new();
        mock.set_response(
            &format!("{}/admin/logs", BASE),
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        mock.set_status(&format!("{}/admin/sessions", BASE), 200, "<html>");
        let client = client_with(&mock, "t");

        assert!(matches!(
            client.logs("").await.unwrap_err(),
            ApiError::Transport { .. }
        ));
        assert!(matches!(
            client.sessions("").await.unwrap_err(),
            ApiError::Decode { .. }
        ));
    }

    #[tokio::test]
    async fn test_config_change_applies_to_next_call() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(crate::traits::Response::json_ok(
            &json!([]),
        )));
        let client = client_with(&mock, "old");

        client.sessions("").await.unwrap();
        client.config().update(|c| {
            c.api_url = "http://other.test".to_string();
            c.token = "new".to_string();
        });
        client.sessions("").await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests[1].url, "http://other.test/admin/sessions");
        assert_eq!(requests[1].headers.get(TOKEN_HEADER).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_summary_ignores_search_terms() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(crate::traits::Response::json_ok(
            &json!([]),
        )));
        let client = client_with(&mock, "t");
        let query = CrashQuery {
            user: "alice".to_string(),
            query: "boom".to_string(),
            ..Default::default()
        };

        client.crashes(&query).await.unwrap();
        client.crash_summary(&query.user).await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests[0].query(), "user=alice&q=boom");
        assert_eq!(requests[1].path(), "http://admin.test/admin/crashes/summary");
        assert_eq!(requests[1].query(), "user=alice");
    }
}
