//! Fadada REST API client.
//!
//! Every call builds a fresh parameter set, signs it, sends it through the
//! client's [`HttpTransport`] and checks the endpoint's own success code.
//!
//! ```rust,no_run
//! use fadada_api_client::rest::{FadadaClient, PersonVerifyRequest};
//!
//! # async fn run() -> Result<(), fadada_api_client::FadadaError> {
//! let client = FadadaClient::from_env()?;
//! let customer_id = client.account_register("105").await?;
//! let verify = client
//!     .get_person_verify_url(&PersonVerifyRequest::new(&customer_id, "https://example.com/back"))
//!     .await?;
//! println!("{} {}", verify.url, verify.transaction_no);
//! # Ok(())
//! # }
//! ```

mod account;
mod client;
mod contract;
pub mod endpoints;
mod request;
mod response;
mod transport;

pub use account::{PersonVerifyRequest, PersonVerifyUrl};
pub use client::{FadadaClient, FadadaClientBuilder};
pub use contract::{SignUrlRequest, UploadDocRequest};
pub use request::{FORM_CONTENT_TYPE, SignedRequest, bookkeeping};
pub use response::ResponseEnvelope;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
