//! Fadada REST API client implementation.

use std::sync::Arc;

use time::UtcOffset;

use crate::auth::{
    Credentials, CredentialsProvider, EnvCredentials, StaticCredentials, SystemTimestamp,
    TimestampProvider, endpoint_from_env,
};
use crate::error::FadadaError;
use crate::rest::endpoints::Endpoint;
use crate::rest::request::SignedRequest;
use crate::rest::response::ResponseEnvelope;
use crate::rest::transport::{HttpTransport, ReqwestTransport};
use crate::types::{HttpMethod, Params};

/// The Fadada REST API client.
///
/// Holds the endpoint, application credentials, a timestamp source and the
/// HTTP transport. None of these change after construction and every call
/// is independent of the previous one.
///
/// # Example
///
/// ```rust,no_run
/// use fadada_api_client::rest::FadadaClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FadadaClient::new("https://example.com/api", "404068", "app_secret");
///
///     let customer_id = client.account_register("105").await?;
///     println!("Customer: {}", customer_id);
///
///     Ok(())
/// }
/// ```
///
/// A custom transport can be injected through the builder:
///
/// ```rust,no_run
/// use fadada_api_client::auth::StaticCredentials;
/// use fadada_api_client::rest::{FadadaClient, ReqwestTransport};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FadadaClient::builder()
///     .endpoint("https://example.com/api")
///     .credentials(Arc::new(StaticCredentials::new("404068", "app_secret")))
///     .transport(ReqwestTransport::with_user_agent("my-app/1.0"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FadadaClient<T = ReqwestTransport> {
    transport: Arc<T>,
    endpoint: String,
    credentials: Arc<dyn CredentialsProvider>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl FadadaClient<ReqwestTransport> {
    /// Create a client with the default transport.
    pub fn new(
        endpoint: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        FadadaClient {
            transport: Arc::new(ReqwestTransport::new()),
            endpoint: normalize_endpoint(endpoint.into()),
            credentials: Arc::new(StaticCredentials::new(app_id, app_secret)),
            timestamp_provider: Arc::new(SystemTimestamp::new()),
        }
    }

    /// Create a client from `FADADA_ENDPOINT`, `FADADA_APP_ID` and
    /// `FADADA_APP_SECRET`.
    pub fn from_env() -> Result<Self, FadadaError> {
        Self::builder()
            .endpoint(endpoint_from_env()?)
            .credentials(Arc::new(EnvCredentials::from_env()?))
            .build()
    }

    /// Create a new client builder.
    pub fn builder() -> FadadaClientBuilder {
        FadadaClientBuilder::new()
    }
}

impl<T: HttpTransport> FadadaClient<T> {
    /// The configured base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// The application credentials.
    pub fn credentials(&self) -> &Credentials {
        self.credentials.get_credentials()
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sign `params` with the current timestamp and address them to `path`.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<SignedRequest, FadadaError> {
        let timestamp = self.timestamp_provider.timestamp();
        SignedRequest::build(
            self.credentials(),
            &self.endpoint,
            method,
            path,
            params,
            &timestamp,
        )
    }

    /// Send a signed request and return the raw response body.
    ///
    /// Any status other than 200 yields [`FadadaError::Transport`]. The body
    /// is not inspected.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        params: Params,
    ) -> Result<String, FadadaError> {
        let request = self.build_request(method, path, params)?;
        tracing::debug!(method = %request.method(), path, "sending Fadada request");

        let response = self.transport.send(&request).await?;
        if response.status != 200 {
            return Err(FadadaError::Transport {
                url: request.url().to_string(),
                status: response.status,
            });
        }

        Ok(response.body)
    }

    /// Call an endpoint and check its success code.
    pub(crate) async fn call(
        &self,
        endpoint: &Endpoint,
        params: Params,
    ) -> Result<ResponseEnvelope, FadadaError> {
        let body = self.execute(endpoint.method, endpoint.path, params).await?;
        let envelope = ResponseEnvelope::parse(body)?;

        match endpoint.success_code {
            Some(code) => envelope.ensure_success(code).inspect_err(|e| {
                tracing::warn!(path = endpoint.path, error = %e, "Fadada request not successful");
            }),
            None => Ok(envelope),
        }
    }
}

impl<T> Clone for FadadaClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: self.endpoint.clone(),
            credentials: Arc::clone(&self.credentials),
            timestamp_provider: Arc::clone(&self.timestamp_provider),
        }
    }
}

impl<T> std::fmt::Debug for FadadaClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FadadaClient")
            .field("endpoint", &self.endpoint)
            .field("credentials", self.credentials.get_credentials())
            .finish()
    }
}

/// Builder for [`FadadaClient`].
///
/// The transport is only constructed in [`build`](Self::build), so replacing
/// the default one costs nothing.
pub struct FadadaClientBuilder<T = ReqwestTransport> {
    endpoint: Option<String>,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    utc_offset: Option<UtcOffset>,
    make_transport: Box<dyn FnOnce() -> T>,
}

impl FadadaClientBuilder<ReqwestTransport> {
    /// Create a new builder with the default transport.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            timestamp_provider: None,
            utc_offset: None,
            make_transport: Box::new(ReqwestTransport::new),
        }
    }

    /// Set a custom user agent on the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        self.make_transport = Box::new(move || ReqwestTransport::with_user_agent(user_agent));
        self
    }
}

impl Default for FadadaClientBuilder<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: HttpTransport> FadadaClientBuilder<T> {
    /// Set the base URL, e.g. `https://example.com/api`.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the credentials provider.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider. Takes precedence over
    /// [`utc_offset`](Self::utc_offset).
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Render timestamps from the system clock at a fixed offset instead of
    /// the local one.
    pub fn utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Replace the HTTP transport.
    pub fn transport<U: HttpTransport + 'static>(self, transport: U) -> FadadaClientBuilder<U> {
        FadadaClientBuilder {
            endpoint: self.endpoint,
            credentials: self.credentials,
            timestamp_provider: self.timestamp_provider,
            utc_offset: self.utc_offset,
            make_transport: Box::new(move || transport),
        }
    }

    /// Build the client.
    ///
    /// Fails with [`FadadaError::MissingConfig`] when the endpoint or the
    /// credentials were not set.
    pub fn build(self) -> Result<FadadaClient<T>, FadadaError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| FadadaError::MissingConfig("endpoint".to_string()))?;
        let credentials = self
            .credentials
            .ok_or_else(|| FadadaError::MissingConfig("credentials".to_string()))?;
        let utc_offset = self.utc_offset;
        let timestamp_provider = self.timestamp_provider.unwrap_or_else(|| {
            Arc::new(utc_offset.map_or_else(SystemTimestamp::new, SystemTimestamp::with_offset))
        });

        Ok(FadadaClient {
            transport: Arc::new((self.make_transport)()),
            endpoint: normalize_endpoint(endpoint),
            credentials,
            timestamp_provider,
        })
    }
}

fn normalize_endpoint(endpoint: String) -> String {
    match endpoint.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => endpoint,
    }
}
