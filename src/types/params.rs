//! Request parameter sets.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FadadaError;

/// Request parameters keyed by name.
///
/// Keys are unique and iterate in ascending byte-wise order, which is the
/// order the request digest consumes values in and the order they are
/// form-encoded in.
///
/// # Example
///
/// ```rust
/// use fadada_api_client::types::Params;
///
/// let mut params = Params::new();
/// params.insert("open_id", "105");
/// params.insert("account_type", "1");
///
/// let keys: Vec<&str> = params.keys().collect();
/// assert_eq!(keys, ["account_type", "open_id"]);
/// assert_eq!(params.to_form_string().unwrap(), "account_type=1&open_id=105");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert a parameter only when `value` is present.
    pub fn insert_opt(&mut self, key: impl Into<String>, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a parameter is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Parameter values in key order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Name/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn to_form_string(&self) -> Result<String, FadadaError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
