//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport used by the admin API client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
