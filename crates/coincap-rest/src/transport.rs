//! HTTP transport abstraction
//!
//! This module provides a trait-based abstraction over the HTTP client,
//! enabling unit testing of request/decode logic without real network calls.
//!
//! # Example
//!
//! ```no_run
//! use coincap_rest::transport::{HttpRequest, HttpTransport, ReqwestTransport, TransportError};
//!
//! async fn example() -> Result<(), TransportError> {
//!     let transport = ReqwestTransport::new();
//!     let response = transport
//!         .send(HttpRequest::get("https://api.coincap.io/v2/assets"))
//!         .await?;
//!     println!("status: {}", response.status);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// The request could not be constructed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Reading the response body failed
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// One HTTP request, as narrow as the wire contract needs
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: String,
    /// Absolute request URL, query string included
    pub url: String,
    /// Additional request headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Create a GET request for the given URL
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Attach a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// One HTTP response: status, raw body bytes, response headers
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw (already decompressed) response body
    pub body: Vec<u8>,
    /// Response headers as (name, value) pairs
    pub headers: Vec<(String, String)>,
}

impl HttpResponse {
    /// A 200 response with the given body and no headers
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            headers: Vec::new(),
        }
    }
}

/// Trait for HTTP transport abstraction
///
/// This trait enables unit testing of client logic by allowing stub
/// implementations to be injected instead of a real HTTP stack. Takes
/// `&self` so one transport can serve concurrent independent calls.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform one request/response round trip
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Real HTTP transport backed by [`reqwest::Client`]
///
/// Negotiates gzip (`Accept-Encoding: gzip`) and decompresses transparently.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with the default timeout
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS), None)
    }

    /// Create a transport with a custom timeout and user agent
    pub fn with_timeout(timeout: Duration, user_agent: Option<&str>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(concat!("coincap-rest/", env!("CARGO_PKG_VERSION"))))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?
            .to_vec();

        debug!(status, len = body.len(), "received response");

        Ok(HttpResponse {
            status,
            body,
            headers,
        })
    }
}

/// Mock transport for testing
///
/// Serves queued responses and captures every request it is handed.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockTransport {
    /// Responses to serve, in order
    responses: std::sync::Mutex<std::collections::VecDeque<Result<HttpResponse, TransportError>>>,
    /// Requests captured from send()
    requests: std::sync::Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create an empty mock transport
    pub fn new() -> Self {
        Self {
            responses: std::sync::Mutex::new(std::collections::VecDeque::new()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw response
    pub fn push_response(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a 200 response with the given body
    pub fn push_success(&self, body: impl Into<Vec<u8>>) {
        self.push_response(HttpResponse::ok(body));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Requests captured so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests performed against this transport
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::ConnectionFailed("no queued response".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_serves_queued_responses() {
        let transport = MockTransport::new();
        transport.push_success(br#"{"data":[]}"#.to_vec());

        let response = transport
            .send(HttpRequest::get("https://mock.test/assets"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(transport.request_count(), 1);
        assert_eq!(transport.requests()[0].url, "https://mock.test/assets");
    }

    #[tokio::test]
    async fn test_mock_transport_failure_injection() {
        let transport = MockTransport::new();
        transport.push_error(TransportError::Timeout);

        let result = transport.send(HttpRequest::get("https://mock.test")).await;
        assert!(matches!(result, Err(TransportError::Timeout)));
    }

    #[tokio::test]
    async fn test_mock_transport_exhausted_queue() {
        let transport = MockTransport::new();
        let result = transport.send(HttpRequest::get("https://mock.test")).await;
        assert!(matches!(result, Err(TransportError::ConnectionFailed(_))));
    }

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::get("https://api.coincap.io/v2/rates")
            .with_header("Accept-Encoding", "gzip");
        assert_eq!(request.method, "GET");
        assert_eq!(request.headers.len(), 1);
    }
}
