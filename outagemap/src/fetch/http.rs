//! HTTP client abstraction for testability

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, trace, warn};

use super::types::FetchError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("outagemap/", env!("CARGO_PKG_VERSION"));

/// Trait for asynchronous HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests.
pub trait AsyncHttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(body))` for a 2xx response
    /// * `Ok(None)` for a 404 response
    /// * `Err(FetchError::Status)` for any other status
    /// * `Err(FetchError::Transport)` if the request or body read failed
    fn get(&self, url: &str) -> impl Future<Output = Result<Option<Vec<u8>>, FetchError>> + Send;
}

impl<T: AsyncHttpClient> AsyncHttpClient for &T {
    fn get(&self, url: &str) -> impl Future<Output = Result<Option<Vec<u8>>, FetchError>> + Send {
        (**self).get(url)
    }
}

/// Async HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct AsyncReqwestClient {
    client: reqwest::Client,
}

impl AsyncReqwestClient {
    /// Creates a new AsyncReqwestClient with default configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new AsyncReqwestClient with custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                reason: format!("Failed to create async HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl Default for AsyncReqwestClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default async HTTP client")
    }
}

impl AsyncHttpClient for AsyncReqwestClient {
    async fn get(&self, url: &str) -> Result<Option<Vec<u8>>, FetchError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            warn!(url = url, status = status.as_u16(), "HTTP error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        match response.bytes().await {
            Ok(bytes) => {
                trace!(url = url, bytes = bytes.len(), "HTTP response body read");
                Ok(Some(bytes.to_vec()))
            }
            Err(e) => {
                warn!(url = url, error = %e, "Failed to read response body");
                Err(FetchError::Transport {
                    url: url.to_string(),
                    reason: format!("Failed to read response: {}", e),
                })
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock async HTTP client for testing.
    ///
    /// Serves canned responses by exact URL; unknown URLs answer 404.
    /// Every requested URL is recorded in order.
    #[derive(Default)]
    pub struct MockAsyncHttpClient {
        responses: HashMap<String, Result<Option<Vec<u8>>, FetchError>>,
        requests: Mutex<Vec<String>>,
    }

    impl MockAsyncHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves `body` with a 200 status at `url`.
        pub fn with_body(mut self, url: &str, body: &str) -> Self {
            self.responses
                .insert(url.to_string(), Ok(Some(body.as_bytes().to_vec())));
            self
        }

        /// Serves an error at `url`.
        pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
            self.responses.insert(url.to_string(), Err(error));
            self
        }

        /// Returns the URLs requested so far.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl AsyncHttpClient for MockAsyncHttpClient {
        async fn get(&self, url: &str) -> Result<Option<Vec<u8>>, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            self.responses.get(url).cloned().unwrap_or(Ok(None))
        }
    }

    #[tokio::test]
    async fn test_mock_client_serves_body() {
        let mock = MockAsyncHttpClient::new().with_body("http://example.com/a", "hello");

        let result = mock.get("http://example.com/a").await;
        assert_eq!(result, Ok(Some(b"hello".to_vec())));
    }

    #[tokio::test]
    async fn test_mock_client_unknown_url_is_not_found() {
        let mock = MockAsyncHttpClient::new();

        let result = mock.get("http://example.com/missing").await;
        assert_eq!(result, Ok(None));
        assert_eq!(mock.requests(), vec!["http://example.com/missing"]);
    }

    #[tokio::test]
    async fn test_mock_client_error() {
        let mock = MockAsyncHttpClient::new().with_error(
            "http://example.com/a",
            FetchError::Status {
                url: "http://example.com/a".to_string(),
                status: 500,
            },
        );

        let result = mock.get("http://example.com/a").await;
        assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(AsyncReqwestClient::with_timeout(5).is_ok());
    }
}
