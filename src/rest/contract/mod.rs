//! Contract document and signing endpoints.

mod types;

pub use types::*;

use crate::error::FadadaError;
use crate::rest::FadadaClient;
use crate::rest::endpoints;
use crate::rest::transport::HttpTransport;
use crate::types::Params;

impl<T: HttpTransport> FadadaClient<T> {
    /// Upload a contract document by URL.
    ///
    /// Unlike the account endpoints, success here is `code = "1000"`.
    pub async fn upload_docs(&self, request: &UploadDocRequest) -> Result<(), FadadaError> {
        self.call(&endpoints::UPLOAD_DOCS, Params::from(request))
            .await?;
        Ok(())
    }

    /// Compose a signed URL for the manual signing page.
    ///
    /// Nothing is sent: the URL is meant for a browser redirect or an
    /// embedded link. `transaction_id` takes part in the digest's time input,
    /// so every signing needs a fresh one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fadada_api_client::rest::{FadadaClient, SignUrlRequest};
    ///
    /// let client = FadadaClient::new("https://example.com/api", "404068", "app_secret");
    /// let request = SignUrlRequest::new(
    ///     "tc-1",
    ///     "C100002",
    ///     "59669721A0BC651ADF68CE491014345F",
    ///     "Hello world.pdf",
    ///     "https://example.com/signed",
    /// );
    /// let url = client.generate_sign_url(&request).unwrap();
    /// assert!(url.starts_with("https://example.com/api/extsign.api?"));
    /// ```
    pub fn generate_sign_url(&self, request: &SignUrlRequest) -> Result<String, FadadaError> {
        let signed = self.build_request(
            endpoints::EXT_SIGN.method,
            endpoints::EXT_SIGN.path,
            Params::from(request),
        )?;
        Ok(signed.into_url().into())
    }
}
