//! Account, identity-verification and certificate endpoints.
//!
//! All of these answer `code = "1"` on success.

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::FadadaError;
use crate::rest::FadadaClient;
use crate::rest::endpoints;
use crate::rest::transport::HttpTransport;
use crate::types::{AccountType, Params};

impl<T: HttpTransport> FadadaClient<T> {
    /// Register a personal account and return its Fadada customer id.
    ///
    /// `open_id` is the caller's own user identifier.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use fadada_api_client::rest::FadadaClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = FadadaClient::from_env()?;
    ///     let customer_id = client.account_register("105").await?;
    ///     println!("{}", customer_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn account_register(&self, open_id: &str) -> Result<String, FadadaError> {
        self.account_register_as(open_id, AccountType::Person).await
    }

    /// Register an account of the given type and return its customer id.
    pub async fn account_register_as(
        &self,
        open_id: &str,
        account_type: AccountType,
    ) -> Result<String, FadadaError> {
        let mut params = Params::new();
        params.insert("open_id", open_id);
        params.insert("account_type", account_type.as_param());

        let envelope = self.call(&endpoints::ACCOUNT_REGISTER, params).await?;
        envelope.require_field("/data")
    }

    /// Get a personal identity-verification URL.
    ///
    /// The provider returns the URL base64-encoded; it is decoded here.
    pub async fn get_person_verify_url(
        &self,
        request: &PersonVerifyRequest,
    ) -> Result<PersonVerifyUrl, FadadaError> {
        let envelope = self
            .call(&endpoints::GET_PERSON_VERIFY_URL, Params::from(request))
            .await?;

        Ok(PersonVerifyUrl {
            url: envelope.decode_base64_field("/data/url")?,
            transaction_no: envelope.field("/data/transactionNo").unwrap_or_default(),
        })
    }

    /// Look up the outcome of a personal verification.
    ///
    /// Returns the `data` payload as-is.
    pub async fn find_person_cert_info(
        &self,
        verified_serialno: &str,
    ) -> Result<Value, FadadaError> {
        let mut params = Params::new();
        params.insert("verified_serialno", verified_serialno);

        let envelope = self.call(&endpoints::FIND_PERSON_CERT_INFO, params).await?;
        Ok(envelope.data().cloned().unwrap_or(Value::Null))
    }

    /// Issue a real-name certificate to a verified customer.
    ///
    /// `verified_serialno` is the transaction number from
    /// [`get_person_verify_url`](Self::get_person_verify_url).
    pub async fn apply_cert(
        &self,
        customer_id: &str,
        verified_serialno: &str,
    ) -> Result<(), FadadaError> {
        let mut params = Params::new();
        params.insert("customer_id", customer_id);
        params.insert("verified_serialno", verified_serialno);

        self.call(&endpoints::APPLY_CERT, params).await?;
        Ok(())
    }
}
