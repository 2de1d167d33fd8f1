//! HTTP registry fetching.
//!
//! A thin blocking client: GET a URL, optionally with a bearer token, and
//! return the body. Status and transport failures map onto distinct errors.

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::{BoilerplateError, Result};

/// Fetches registry documents over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

/// Authentication header attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    /// Header name (e.g., "Authorization").
    pub header_name: String,
    /// Header value (e.g., "Bearer token123").
    pub header_value: String,
}

impl AuthHeader {
    /// Create a Bearer token auth header.
    pub fn bearer(token: &str) -> Self {
        Self {
            header_name: "Authorization".to_string(),
            header_value: format!("Bearer {}", token),
        }
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent("boilerplates")
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, timeout }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a URL, attaching `Authorization: Bearer <token>` when a token is given.
    pub fn fetch(&self, url: &str, token: Option<&str>) -> Result<String> {
        let mut request = self.client.get(url);
        if let Some(token) = token {
            let auth = AuthHeader::bearer(token);
            request = request.header(&auth.header_name, &auth.header_value);
        }

        debug!(url, authenticated = token.is_some(), "fetching");
        let response = request.send().map_err(|e| BoilerplateError::RegistryFetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BoilerplateError::RegistryStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| BoilerplateError::RegistryFetch {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = HttpFetcher::default();
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn bearer_auth_header_format() {
        let auth = AuthHeader::bearer("my-token");
        assert_eq!(auth.header_name, "Authorization");
        assert_eq!(auth.header_value, "Bearer my-token");
    }

    #[test]
    fn fetch_returns_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/registry.json");
            then.status(200).body("{\"templates\": []}");
        });

        let body = HttpFetcher::new()
            .fetch(&server.url("/registry.json"), None)
            .unwrap();

        assert_eq!(body, "{\"templates\": []}");
    }

    #[test]
    fn fetch_sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/private.json")
                .header("Authorization", "Bearer secret-token");
            then.status(200).body("{}");
        });

        HttpFetcher::new()
            .fetch(&server.url("/private.json"), Some("secret-token"))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn non_success_status_is_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404).body("Not Found");
        });

        let err = HttpFetcher::new()
            .fetch(&server.url("/missing.json"), None)
            .unwrap_err();

        assert!(matches!(
            err,
            BoilerplateError::RegistryStatus { status: 404, .. }
        ));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn unreachable_host_is_fetch_error() {
        let err = HttpFetcher::with_timeout(Duration::from_secs(2))
            .fetch("http://127.0.0.1:1/registry.json", None)
            .unwrap_err();

        assert!(matches!(err, BoilerplateError::RegistryFetch { .. }));
    }
}
