//! # HTTP Client Utilities
//!
//! Shared HTTP client and transport for supplier adapters.
//!
//! This module provides:
//! - [`HttpClient`]: a reqwest wrapper with a request timeout, JSON bodies
//!   and status-to-error mapping
//! - [`HttpTransport`]: a [`SupplierTransport`] posting a supplier's native
//!   request to `{endpoint}/search` and decoding a JSON array of records
//!
//! # Examples
//!
//! ```ignore
//! use deflight::infrastructure::suppliers::http_client::{HttpClient, HttpTransport};
//!
//! let client = HttpClient::new(5000)?;
//! let transport = HttpTransport::new(client, "https://api.crazyair.example");
//! assert_eq!(transport.url(), "https://api.crazyair.example/search");
//! ```

use crate::infrastructure::suppliers::error::{SupplierError, SupplierResult};
use crate::infrastructure::suppliers::traits::SupplierTransport;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Path appended to a supplier's base endpoint.
const SEARCH_PATH: &str = "search";

/// Upper bound on supplier error body characters carried into an error.
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Cuts an error body down to [`MAX_ERROR_BODY_CHARS`] characters.
fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((end, _)) => format!("{}...", body.get(..end).unwrap_or(body)),
        None => body.to_string(),
    }
}

/// HTTP client wrapper for supplier adapters.
///
/// Provides a convenient interface for making HTTP requests with
/// proper error handling and timeout configuration.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Arguments
    ///
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> SupplierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                SupplierError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a POST request with JSON body and deserializes the JSON response.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request.
    /// * `body` - The request body to serialize as JSON.
    ///
    /// # Errors
    ///
    /// Returns `SupplierError::Timeout` or `SupplierError::Connection` if the
    /// request fails, a status-specific error for non-2xx responses, and
    /// `SupplierError::ProtocolError` if the response cannot be parsed.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> SupplierResult<T> {
        tracing::debug!(url, "posting supplier request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> SupplierResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                SupplierError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = truncate_body(&response.text().await.unwrap_or_default());
            tracing::warn!(%status, body = %error_body, "supplier returned non-success status");
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a SupplierError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> SupplierError {
        tracing::warn!(error = %error, "supplier request failed");
        if error.is_timeout() {
            SupplierError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            SupplierError::connection(format!("Connection failed: {}", error))
        } else {
            SupplierError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a SupplierError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> SupplierError {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                SupplierError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::NOT_FOUND => {
                SupplierError::protocol_error(format!("Resource not found: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => SupplierError::rate_limited("Rate limit exceeded"),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                SupplierError::timeout(format!("Upstream timeout ({}): {}", status, body))
            }
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE => {
                SupplierError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => SupplierError::protocol_error(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

/// HTTP transport posting a supplier's native request to its search
/// endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: HttpClient,
    url: String,
}

impl HttpTransport {
    /// Creates a transport targeting `{base_url}/search`.
    #[must_use]
    pub fn new(client: HttpClient, base_url: &str) -> Self {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), SEARCH_PATH);
        Self { client, url }
    }

    /// Returns the full search URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl<Req, Resp> SupplierTransport<Req, Resp> for HttpTransport
where
    Req: Serialize + Send + Sync,
    Resp: DeserializeOwned + Send,
{
    async fn send(&self, request: &Req) -> SupplierResult<Vec<Resp>> {
        self.client.post(&self.url, request).await
    }
}
