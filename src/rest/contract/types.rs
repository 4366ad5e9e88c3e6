//! Types for contract document and signing endpoints.

use crate::types::Params;

/// Upload a contract document that Fadada fetches from a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDocRequest {
    /// Caller-chosen contract id.
    pub contract_id: String,
    /// Title shown to signers.
    pub doc_title: String,
    /// Publicly reachable document URL.
    pub doc_url: String,
    /// File extension including the dot, e.g. `.pdf`.
    pub doc_type: String,
}

impl UploadDocRequest {
    /// Create an upload request.
    pub fn new(
        contract_id: impl Into<String>,
        doc_title: impl Into<String>,
        doc_url: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        Self {
            contract_id: contract_id.into(),
            doc_title: doc_title.into(),
            doc_url: doc_url.into(),
            doc_type: doc_type.into(),
        }
    }
}

impl From<&UploadDocRequest> for Params {
    fn from(request: &UploadDocRequest) -> Self {
        let mut params = Params::new();
        params.insert("contract_id", request.contract_id.as_str());
        params.insert("doc_title", request.doc_title.as_str());
        params.insert("doc_url", request.doc_url.as_str());
        params.insert("doc_type", request.doc_type.as_str());
        params
    }
}

/// Compose a manual signing URL for one customer and contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUrlRequest {
    /// Caller-chosen transaction id, unique per signing.
    pub transaction_id: String,
    /// Contract previously uploaded.
    pub contract_id: String,
    /// Signing customer.
    pub customer_id: String,
    /// Title shown on the signing page.
    pub doc_title: String,
    /// Where the signer lands afterwards.
    pub return_url: String,
    /// Minimum reading time in seconds, `"10"` by default.
    pub read_time: String,
    /// Client environment, `"1"` (mini program) by default.
    pub open_environment: String,
}

impl SignUrlRequest {
    /// Create a request with the default reading time and environment.
    pub fn new(
        transaction_id: impl Into<String>,
        contract_id: impl Into<String>,
        customer_id: impl Into<String>,
        doc_title: impl Into<String>,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            contract_id: contract_id.into(),
            customer_id: customer_id.into(),
            doc_title: doc_title.into(),
            return_url: return_url.into(),
            read_time: "10".to_string(),
            open_environment: "1".to_string(),
        }
    }

    /// Override the minimum reading time.
    pub fn read_time(mut self, seconds: impl Into<String>) -> Self {
        self.read_time = seconds.into();
        self
    }

    /// Override the client environment.
    pub fn open_environment(mut self, environment: impl Into<String>) -> Self {
        self.open_environment = environment.into();
        self
    }
}

impl From<&SignUrlRequest> for Params {
    fn from(request: &SignUrlRequest) -> Self {
        let mut params = Params::new();
        params.insert("transaction_id", request.transaction_id.as_str());
        params.insert("contract_id", request.contract_id.as_str());
        params.insert("customer_id", request.customer_id.as_str());
        params.insert("doc_title", request.doc_title.as_str());
        params.insert("return_url", request.return_url.as_str());
        params.insert("read_time", request.read_time.as_str());
        params.insert("open_environment", request.open_environment.as_str());
        params
    }
}
