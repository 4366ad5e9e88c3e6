//! Types for account, verification and certificate endpoints.

use crate::types::Params;

/// Request for a personal identity-verification URL.
///
/// The end user is sent to the returned URL and, once verification finishes,
/// redirected to `return_url` with the outcome in signed query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonVerifyRequest {
    /// Customer id obtained from account registration.
    pub customer_id: String,
    /// Where the user lands after verification.
    pub return_url: String,
    /// Asynchronous notification URL; defaults to `return_url`.
    pub notify_url: Option<String>,
    /// Verification method (`verified_way`), `"0"` by default.
    pub verified_way: String,
    /// Whether the user may edit the pre-filled fields (`page_modify`), `"1"` by default.
    pub page_modify: String,
    /// Pre-filled legal name.
    pub customer_name: Option<String>,
    /// Pre-filled identity document number.
    pub customer_ident_no: Option<String>,
    /// Pre-filled mobile number.
    pub mobile: Option<String>,
}

impl PersonVerifyRequest {
    /// Create a request with the default verification settings.
    pub fn new(customer_id: impl Into<String>, return_url: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            return_url: return_url.into(),
            notify_url: None,
            verified_way: "0".to_string(),
            page_modify: "1".to_string(),
            customer_name: None,
            customer_ident_no: None,
            mobile: None,
        }
    }

    /// Set a notification URL distinct from the return URL.
    pub fn notify_url(mut self, url: impl Into<String>) -> Self {
        self.notify_url = Some(url.into());
        self
    }

    /// Set the verification method.
    pub fn verified_way(mut self, way: impl Into<String>) -> Self {
        self.verified_way = way.into();
        self
    }

    /// Set whether pre-filled fields may be edited.
    pub fn page_modify(mut self, page_modify: impl Into<String>) -> Self {
        self.page_modify = page_modify.into();
        self
    }

    /// Pre-fill the legal name.
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Pre-fill the identity document number.
    pub fn customer_ident_no(mut self, ident_no: impl Into<String>) -> Self {
        self.customer_ident_no = Some(ident_no.into());
        self
    }

    /// Pre-fill the mobile number.
    pub fn mobile(mut self, mobile: impl Into<String>) -> Self {
        self.mobile = Some(mobile.into());
        self
    }
}

impl From<&PersonVerifyRequest> for Params {
    fn from(request: &PersonVerifyRequest) -> Self {
        let mut params = Params::new();
        params.insert("customer_id", request.customer_id.as_str());
        params.insert("verified_way", request.verified_way.as_str());
        params.insert("page_modify", request.page_modify.as_str());
        params.insert(
            "notify_url",
            request
                .notify_url
                .as_deref()
                .unwrap_or(request.return_url.as_str()),
        );
        params.insert("return_url", request.return_url.as_str());
        params.insert_opt("customer_name", request.customer_name.as_deref());
        params.insert_opt("customer_ident_no", request.customer_ident_no.as_deref());
        params.insert_opt("mobile", request.mobile.as_deref());
        params
    }
}

/// Verification URL issued by Fadada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonVerifyUrl {
    /// Decoded URL to send the user to.
    pub url: String,
    /// Verification serial number, later passed to
    /// [`apply_cert`](crate::rest::FadadaClient::apply_cert).
    pub transaction_no: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_request_defaults() {
        let request = PersonVerifyRequest::new("43FA92D8", "https://example.com/back");
        let params = Params::from(&request);

        assert_eq!(params.get("customer_id"), Some("43FA92D8"));
        assert_eq!(params.get("verified_way"), Some("0"));
        assert_eq!(params.get("page_modify"), Some("1"));
        assert_eq!(params.get("notify_url"), Some("https://example.com/back"));
        assert_eq!(params.get("return_url"), Some("https://example.com/back"));
        assert!(!params.contains_key("customer_name"));
        assert!(!params.contains_key("mobile"));
        assert_eq!(params.len(), 5);
    }

    #[test]
    fn test_verify_request_prefill() {
        let request = PersonVerifyRequest::new("43FA92D8", "https://example.com/back")
            .notify_url("https://example.com/notify")
            .customer_name("李华")
            .customer_ident_no("51052119851107071X")
            .mobile("18200509114");
        let params = Params::from(&request);

        assert_eq!(params.get("notify_url"), Some("https://example.com/notify"));
        assert_eq!(params.get("customer_name"), Some("李华"));
        assert_eq!(params.get("customer_ident_no"), Some("51052119851107071X"));
        assert_eq!(params.get("mobile"), Some("18200509114"));
        assert_eq!(params.len(), 8);
    }
}
