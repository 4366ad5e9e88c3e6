//! HTTP transport seam.
//!
//! [`FadadaClient`](crate::rest::FadadaClient) sends every request through an
//! [`HttpTransport`]. The default [`ReqwestTransport`] wraps `reqwest` with
//! tracing middleware; tests substitute their own implementation to observe
//! outgoing requests and script responses.

use std::future::Future;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::FadadaError;
use crate::rest::request::SignedRequest;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as text.
    pub body: String,
}

impl TransportResponse {
    /// Create a response from a status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends a [`SignedRequest`] and returns the raw response.
///
/// Implementations should not interpret the status code; the client decides
/// what counts as a transport failure.
pub trait HttpTransport: Send + Sync {
    /// Send the request and read the full response body.
    fn send(
        &self,
        request: &SignedRequest,
    ) -> impl Future<Output = Result<TransportResponse, FadadaError>> + Send;
}

/// Default transport backed by `reqwest` with tracing middleware.
///
/// No retry middleware is installed: a failed attempt surfaces immediately.
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: ClientWithMiddleware,
}

impl ReqwestTransport {
    /// Create a transport with the default user agent.
    pub fn new() -> Self {
        Self::with_user_agent(format!("fadada-api-client/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Create a transport sending a custom user agent.
    pub fn with_user_agent(user_agent: impl AsRef<str>) -> Self {
        let mut headers = HeaderMap::new();
        let header_value = HeaderValue::from_str(user_agent.as_ref())
            .unwrap_or_else(|_| HeaderValue::from_static("fadada-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self::with_client(reqwest_client)
    }

    /// Wrap an existing `reqwest` client.
    pub fn with_client(client: reqwest::Client) -> Self {
        let http_client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();
        Self { http_client }
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &SignedRequest) -> Result<TransportResponse, FadadaError> {
        let mut builder = self
            .http_client
            .request(request.method().into(), request.url().clone());
        if let Some(content_type) = request.content_type() {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
