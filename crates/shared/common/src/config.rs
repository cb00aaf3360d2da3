//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// HTTP API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiClientConfig {
    /// Base URL of the Prevtrans REST API
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/v1/prevtrans".to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: 30000,
        }
    }
}

/// Form behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    /// Quiescence window before a remote uniqueness check fires, in
    /// milliseconds.
    pub quiescence_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { quiescence_ms: 1000 }
    }
}
