//! Remote API endpoints and the shared HTTP client.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.ainative.studio";

const LOGIN_PATH: &str = "/v1/public/auth/login-json";
const EXECUTE_PATH: &str = "/v1/public/zerodb/mcp/execute";

/// Fixed endpoints of the ZeroDB API, derived from its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{LOGIN_PATH}", self.base)
    }

    #[must_use]
    pub fn execute_url(&self) -> String {
        format!("{}{EXECUTE_PATH}", self.base)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// Builds the HTTP client shared by authentication and operation calls.
///
/// Per-request timeouts are applied by the callers; this only bounds connection setup.
///
/// # Errors
/// Returns an error when the TLS backend cannot be initialised.
pub fn build_client(connect_timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!("zerodb-mcp/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(connect_timeout)
        .build()
}

/// Renders a transport error without the request URL.
pub(crate) fn describe_transport_error(err: reqwest::Error) -> String {
    err.without_url().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_trim_trailing_slash() {
        let endpoints = ApiEndpoints::new("http://localhost:9000/");
        assert_eq!(endpoints.base(), "http://localhost:9000");
        assert_eq!(
            endpoints.login_url(),
            "http://localhost:9000/v1/public/auth/login-json"
        );
        assert_eq!(
            endpoints.execute_url(),
            "http://localhost:9000/v1/public/zerodb/mcp/execute"
        );
    }

    #[test]
    fn default_endpoints_point_at_hosted_api() {
        assert_eq!(ApiEndpoints::default().base(), DEFAULT_API_URL);
    }
}
