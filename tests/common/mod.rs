//! Common test utilities for integration tests.
//!
//! Builds an [`App`] over a scripted [`MockHttpClient`] that answers every
//! admin endpoint with small but valid payloads. Individual tests override
//! the endpoints they care about.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};
use trackdeck::adapters::MockHttpClient;
use trackdeck::app::App;
use trackdeck::config::ConsoleConfig;
use trackdeck::models::ChartMetric;
use trackdeck::surface::SurfacePool;

pub const BASE: &str = "http://admin.test";
pub const TOKEN: &str = "test-token";

/// Full mock URL for an admin path.
pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

pub fn test_config(export_dir: Option<PathBuf>) -> ConsoleConfig {
    ConsoleConfig {
        api_url: BASE.to_string(),
        token: TOKEN.to_string(),
        export_dir,
    }
}

/// A console wired to a mock transport, plus handles to inspect it.
pub struct TestConsole {
    pub app: App,
    pub http: MockHttpClient,
    pub pool: SurfacePool,
}

impl TestConsole {
    pub fn new() -> Self {
        Self::with_config(test_config(None))
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        let http = MockHttpClient::new();
        script_defaults(&http);
        let pool = SurfacePool::new();
        let app = App::with_http(Arc::new(http.clone()), config, pool.clone());
        Self { app, http, pool }
    }

    /// Replace the answer of one admin path.
    pub fn respond(&self, path: &str, value: Value) {
        self.http.set_json(&url(path), value);
    }

    /// Query strings of every request made to `path`, in order.
    pub fn queries(&self, path: &str) -> Vec<String> {
        self.http
            .get_requests()
            .into_iter()
            .filter(|r| r.path() == url(path))
            .map(|r| r.query().to_string())
            .collect()
    }
}

/// Script every endpoint with a valid minimal payload.
pub fn script_defaults(http: &MockHttpClient) {
    http.set_json(&url("/admin/users"), json!(["alice", "bob"]));
    http.set_json(
        &url("/admin/overview"),
        json!({
            "users_count": 2,
            "sessions_7d": 5,
            "crashes_7d": 1,
            "latest_sessions": [],
            "latest_crashes": []
        }),
    );
    http.set_json(&url("/admin/sessions"), json!([]));
    http.set_json(&url("/admin/logs"), json!([]));
    http.set_json(&url("/admin/crashes"), json!([]));
    http.set_json(&url("/admin/crashes/summary"), json!([]));

    for metric in ChartMetric::ALL {
        let body = match metric {
            ChartMetric::NewVsReturning => json!({"new_users": 2, "returning_users": 6}),
            _ => json!([]),
        };
        http.set_json(&url(&format!("/admin/charts/{}", metric.endpoint())), body);
    }
}
