//! Admin front-end configuration.

use std::env;

use common::{ApiClientConfig, FormConfig};

/// Configuration for the admin front-end.
#[derive(Debug, Clone, Default)]
pub struct AdminConfig {
    /// HTTP client settings (base URL, timeouts)
    pub api: ApiClientConfig,
    /// Form behavior (quiescence window)
    pub form: FormConfig,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api: ApiClientConfig {
                base_url: env::var("PREVTRANS_API").unwrap_or(defaults.api.base_url),
                connect_timeout_ms: env::var("PREVTRANS_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.api.connect_timeout_ms),
                request_timeout_ms: env::var("PREVTRANS_REQUEST_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.api.request_timeout_ms),
            },
            form: FormConfig {
                quiescence_ms: env::var("PREVTRANS_QUIESCENCE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.form.quiescence_ms),
            },
        }
    }
}
