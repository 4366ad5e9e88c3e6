//! # Fadada Client
//!
//! An async Rust client library for the Fadada electronic-signature HTTP API.
//!
//! ## Features
//!
//! - Account registration and personal identity verification
//! - Real-name certificate application
//! - Contract document upload
//! - Signed URLs for the manual signing page
//! - The provider's SHA1/MD5 request digest, reproducible byte for byte
//! - Injectable HTTP transport for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fadada_api_client::rest::FadadaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FadadaClient::new("https://example.com/api", "404068", "app_secret");
//!     let customer_id = client.account_register("105").await?;
//!     println!("Customer: {}", customer_id);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::FadadaError;
pub use rest::FadadaClient;
pub use types::{HttpMethod, Params};

/// Result type alias using FadadaError
pub type Result<T> = std::result::Result<T, FadadaError>;
