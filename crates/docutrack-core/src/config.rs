//! Client Configuration
//!
//! API endpoint settings and the fixed UI tuning constants.

use serde::{Deserialize, Serialize};

/// Development backend the dashboard talks to
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Queries shorter than this never produce suggestions
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// Upper bound on the suggestion dropdown
pub const MAX_SUGGESTIONS: usize = 5;

/// Delay before hiding suggestions on blur, so a click on an entry still lands
pub const SUGGESTION_HIDE_DELAY_MS: u32 = 200;

/// Toasts dismiss themselves after this long
pub const TOAST_DISMISS_MS: u32 = 4_000;

/// Per-file upload limit enforced before anything is sent
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Only Word documents are accepted by the backend
pub const UPLOAD_EXTENSION: &str = ".docx";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Join an API path (with or without a leading slash) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_dev_backend() {
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::new("http://example.test/api/");
        assert_eq!(config.base_url, "http://example.test/api");
        assert_eq!(config.endpoint("/contracts"), "http://example.test/api/contracts");
        assert_eq!(
            config.endpoint("analytics/summary"),
            "http://example.test/api/analytics/summary"
        );
    }
}
