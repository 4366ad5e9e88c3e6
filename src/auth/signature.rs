//! `msg_digest` generation for Fadada API authentication.
//!
//! Every request is signed as:
//! ```text
//! effective_time = transaction_id + timestamp     (timestamp alone without a transaction id)
//! values_digest  = HEX(SHA1(secret + values sorted by key))
//! time_digest    = HEX(MD5(effective_time))
//! msg_digest     = BASE64(HEX(SHA1(app_id + time_digest + values_digest)))
//! ```
//!
//! `HEX` is uppercase hexadecimal. Each step consumes the previous step's hex
//! text, not its raw digest bytes, and the final base64 runs over the hex text
//! as well. The provider verifies exactly this shape.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use md5::Md5;
use sha1::{Digest, Sha1};

use crate::auth::Credentials;
use crate::types::Params;

/// Parameter whose value is folded into the time digest when present.
pub const TRANSACTION_ID: &str = "transaction_id";

/// Compute the `msg_digest` for a parameter set.
///
/// `params` must be exactly the set that will be transmitted, before the
/// bookkeeping fields (`app_id`, `timestamp`, `v`, `msg_digest`) are added.
///
/// # Example
///
/// ```rust
/// use fadada_api_client::auth::{Credentials, sign_params};
/// use fadada_api_client::types::Params;
///
/// let credentials = Credentials::new("000000", "fdd20141119");
/// let mut params = Params::new();
/// params.insert("account_id", "1");
/// params.insert("contract_id", "testopenid");
///
/// let digest = sign_params(&credentials, "20191012114711", &params);
/// assert_eq!(digest, "QjQ5MUQ2OUM1RTEyOTFBQkZDNTc1MkQ2Mjc4M0I1QjUwMjJGQUI1RA==");
/// ```
pub fn sign_params(credentials: &Credentials, timestamp: &str, params: &Params) -> String {
    let effective_time = match params.get(TRANSACTION_ID) {
        Some(transaction_id) if !transaction_id.is_empty() => {
            format!("{transaction_id}{timestamp}")
        }
        _ => timestamp.to_string(),
    };

    // Params iterate in byte-wise key order.
    let sorted_values: String = params.values().collect();

    let values_digest = sha1_hex(&[credentials.expose_secret(), sorted_values.as_str()]);
    let time_digest = md5_hex(&effective_time);
    let digest = sha1_hex(&[
        credentials.app_id.as_str(),
        time_digest.as_str(),
        values_digest.as_str(),
    ]);

    BASE64.encode(digest.as_bytes())
}

fn sha1_hex(parts: &[&str]) -> String {
    let mut hasher = Sha1::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    format!("{:X}", hasher.finalize())
}

fn md5_hex(input: &str) -> String {
    format!("{:X}", Md5::digest(input.as_bytes()))
}
