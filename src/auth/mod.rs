//! Authentication module for the Fadada API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Timestamp generation for the `timestamp` request parameter
//! - The SHA1/MD5 `msg_digest` computed over every request

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    APP_ID_VAR, APP_SECRET_VAR, Credentials, CredentialsProvider, ENDPOINT_VAR, EnvCredentials,
    StaticCredentials, endpoint_from_env,
};
pub use signature::{TRANSACTION_ID, sign_params};
pub use timestamp::{
    FixedTimestamp, PROVIDER_OFFSET, SystemTimestamp, TimestampProvider, format_timestamp,
};
