//! Common domain types for the Fadada API.

/// HTTP method used to reach a Fadada endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Parameters travel in the query string, the body is empty
    Get,
    /// Parameters travel in a form-encoded body
    Post,
}

impl HttpMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Account type sent on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountType {
    /// Individual person
    #[default]
    Person,
    /// Company or organisation
    Company,
}

impl AccountType {
    /// Wire value of the `account_type` parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            AccountType::Person => "1",
            AccountType::Company => "2",
        }
    }
}
