//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses and request capture

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
