//! HTTP client building.

mod client;

pub use client::{HttpClientBuilder, HttpClientConfig, DEFAULT_TIMEOUT};
