//! Error types for the Fadada client library.

use thiserror::Error;

/// The main error type for all Fadada client operations.
#[derive(Error, Debug)]
pub enum FadadaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The provider answered with a status other than 200.
    #[error("Request {url} with status: {status}")]
    Transport {
        /// Full request URL, including the query string for GET requests
        url: String,
        /// Observed HTTP status code
        status: u16,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Form encoding error
    #[error("Form encoding error: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// A field that should carry base64 text could not be decoded
    #[error("Base64 decode error in `{field}`: {source}")]
    Decode {
        /// JSON pointer of the offending field
        field: String,
        /// Underlying decoder failure
        #[source]
        source: base64::DecodeError,
    },

    /// A caller-supplied parameter collides with a field the client sets after signing
    #[error("Parameter `{0}` is reserved and set by the client")]
    ReservedParameter(String),

    /// Fadada returned a business-level failure code
    #[error("Response not success: {0}")]
    Api(ApiError),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required configuration (endpoint, app id or secret)
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

/// Business failure reported in a Fadada response body.
///
/// The provider answers HTTP 200 for most failures and signals them through
/// the `code` (or `result`) field instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The status code found in the response, empty when absent
    pub code: String,
    /// The `msg` field, empty when absent
    pub message: String,
    /// The raw response body
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.body)
    }
}

impl ApiError {
    /// Create a new API error from code, message and the raw body.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            body: body.into(),
        }
    }
}

/// Known Fadada status codes.
pub mod error_codes {
    /// Success for the account, verification and certificate endpoints.
    pub const SUCCESS: &str = "1";
    /// Success for the document endpoints.
    pub const SUCCESS_DOCS: &str = "1000";
}
