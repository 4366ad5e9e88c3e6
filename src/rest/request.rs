//! Signed request construction.

use url::Url;

use crate::auth::{Credentials, sign_params};
use crate::error::FadadaError;
use crate::rest::endpoints::PROTOCOL_VERSION;
use crate::types::{HttpMethod, Params};

/// Content type of POST bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Bookkeeping parameter names appended after signing.
pub mod bookkeeping {
    /// Application id.
    pub const APP_ID: &str = "app_id";
    /// Request timestamp, `YYYYMMDDHHMMSS`.
    pub const TIMESTAMP: &str = "timestamp";
    /// Protocol version.
    pub const VERSION: &str = "v";
    /// Request signature.
    pub const MSG_DIGEST: &str = "msg_digest";

    /// Every name above. Callers may not supply any of them.
    pub const ALL: [&str; 4] = [APP_ID, TIMESTAMP, VERSION, MSG_DIGEST];
}

/// A fully addressed, signed request ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    method: HttpMethod,
    url: Url,
    body: Option<String>,
    content_type: Option<&'static str>,
}

impl SignedRequest {
    /// Sign `params` and address them to `base_url + path`.
    ///
    /// The digest covers `params` exactly as passed in. The bookkeeping fields
    /// are added afterwards and never feed the digest, so `params` carrying any
    /// of them fails with [`FadadaError::ReservedParameter`].
    pub fn build(
        credentials: &Credentials,
        base_url: &str,
        method: HttpMethod,
        path: &str,
        mut params: Params,
        timestamp: &str,
    ) -> Result<Self, FadadaError> {
        if let Some(key) = bookkeeping::ALL.iter().find(|key| params.contains_key(key)) {
            return Err(FadadaError::ReservedParameter(key.to_string()));
        }

        let digest = sign_params(credentials, timestamp, &params);

        params.insert(bookkeeping::APP_ID, credentials.app_id.as_str());
        params.insert(bookkeeping::TIMESTAMP, timestamp);
        params.insert(bookkeeping::VERSION, PROTOCOL_VERSION);
        params.insert(bookkeeping::MSG_DIGEST, digest);

        let mut url = Url::parse(&format!("{base_url}{path}"))?;
        let form = params.to_form_string()?;

        let request = match method {
            HttpMethod::Get => {
                url.set_query(Some(&form));
                Self {
                    method,
                    url,
                    body: None,
                    content_type: None,
                }
            }
            HttpMethod::Post => Self {
                method,
                url,
                body: Some(form),
                content_type: Some(FORM_CONTENT_TYPE),
            },
        };
        Ok(request)
    }

    /// HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Target URL; carries the query string for GET requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Form-encoded body, present only for POST requests.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// `Content-Type` header value, present only for POST requests.
    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    /// Consume the request, returning its URL.
    pub fn into_url(self) -> Url {
        self.url
    }
}
