//! Fadada REST API endpoint table.
//!
//! The provider uses two success conventions: the account, verification and
//! certificate endpoints answer `code = "1"`, the document endpoints answer
//! `code = "1000"`. Each endpoint carries its own success code rather than
//! sharing one, since the two families genuinely differ upstream.

use crate::error::error_codes;
use crate::types::HttpMethod;

/// Sandbox endpoint published for integration testing.
pub const FADADA_SANDBOX_URL: &str = "http://test.api.fabigbig.com:8888/api";

/// Value of the `v` bookkeeping parameter.
pub const PROTOCOL_VERSION: &str = "2.0";

/// A Fadada endpoint and the response code that means success for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// How the request is sent.
    pub method: HttpMethod,
    /// Path appended to the configured base URL.
    pub path: &'static str,
    /// `code` value that indicates success, `None` for URLs that are handed
    /// to a browser instead of being called.
    pub success_code: Option<&'static str>,
}

impl Endpoint {
    const fn post(path: &'static str, success_code: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
            success_code: Some(success_code),
        }
    }
}

/// Register an account and obtain a customer id.
pub const ACCOUNT_REGISTER: Endpoint =
    Endpoint::post("/account_register.api", error_codes::SUCCESS);
/// Get a personal identity-verification URL.
pub const GET_PERSON_VERIFY_URL: Endpoint =
    Endpoint::post("/get_person_verify_url.api", error_codes::SUCCESS);
/// Query the outcome of a personal identity verification.
pub const FIND_PERSON_CERT_INFO: Endpoint =
    Endpoint::post("/find_personCertInfo.api", error_codes::SUCCESS);
/// Apply for a real-name certificate.
pub const APPLY_CERT: Endpoint = Endpoint::post("/apply_cert.api", error_codes::SUCCESS);
/// Upload a contract document by URL.
pub const UPLOAD_DOCS: Endpoint = Endpoint::post("/uploaddocs.api", error_codes::SUCCESS_DOCS);
/// Manual signing page. Only ever composed into a URL.
pub const EXT_SIGN: Endpoint = Endpoint {
    method: HttpMethod::Get,
    path: "/extsign.api",
    success_code: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_codes_per_family() {
        for endpoint in [
            ACCOUNT_REGISTER,
            GET_PERSON_VERIFY_URL,
            FIND_PERSON_CERT_INFO,
            APPLY_CERT,
        ] {
            assert_eq!(endpoint.success_code, Some("1"), "{}", endpoint.path);
        }
        assert_eq!(UPLOAD_DOCS.success_code, Some("1000"));
        assert_eq!(EXT_SIGN.success_code, None);
        assert_eq!(EXT_SIGN.method, HttpMethod::Get);
    }
}
