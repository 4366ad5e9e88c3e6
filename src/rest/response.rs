//! Fadada response envelope.
//!
//! Responses are flat JSON objects with a status field (`code`, or `result` on
//! some endpoints), an optional `msg` and a `data` payload that is sometimes an
//! object and sometimes a plain or base64 string. Fields are looked up by
//! JSON pointer rather than decoded against a schema.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde_json::Value;

use crate::error::{ApiError, FadadaError};

/// A parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    body: String,
    value: Value,
}

impl ResponseEnvelope {
    /// Parse a raw response body.
    pub fn parse(body: impl Into<String>) -> Result<Self, FadadaError> {
        let body = body.into();
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            FadadaError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })?;
        Ok(Self { body, value })
    }

    /// Status code, read from `code` and falling back to `result`.
    pub fn code(&self) -> Option<String> {
        self.field("/code").or_else(|| self.field("/result"))
    }

    /// The `msg` field.
    pub fn message(&self) -> Option<String> {
        self.field("/msg")
    }

    /// The `data` payload as JSON.
    pub fn data(&self) -> Option<&Value> {
        self.value.get("data")
    }

    /// Text of the scalar at `pointer`.
    ///
    /// Strings are returned as-is; numbers and booleans are rendered, since the
    /// provider is not consistent about quoting. Objects, arrays and `null`
    /// yield `None`.
    pub fn field(&self, pointer: &str) -> Option<String> {
        match self.value.pointer(pointer)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Text of the field at `pointer`, failing when it is absent.
    pub fn require_field(&self, pointer: &str) -> Result<String, FadadaError> {
        self.field(pointer).ok_or_else(|| {
            FadadaError::InvalidResponse(format!(
                "Response missing '{}' field. Body: {}",
                pointer, self.body
            ))
        })
    }

    /// Base64-decode the field at `pointer` as UTF-8 text.
    pub fn decode_base64_field(&self, pointer: &str) -> Result<String, FadadaError> {
        let encoded = self.require_field(pointer)?;
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|source| FadadaError::Decode {
                field: pointer.to_string(),
                source,
            })?;
        String::from_utf8(bytes).map_err(|e| {
            FadadaError::InvalidResponse(format!("Field '{}' is not UTF-8: {}", pointer, e))
        })
    }

    /// Whether the status code equals `success_code`.
    pub fn is_success(&self, success_code: &str) -> bool {
        self.code().as_deref() == Some(success_code)
    }

    /// Fail with [`FadadaError::Api`] unless the status code equals `success_code`.
    pub fn ensure_success(self, success_code: &str) -> Result<Self, FadadaError> {
        if self.is_success(success_code) {
            return Ok(self);
        }
        Err(FadadaError::Api(ApiError::new(
            self.code().unwrap_or_default(),
            self.message().unwrap_or_default(),
            self.body,
        )))
    }

    /// The raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The parsed body.
    pub fn value(&self) -> &Value {
        &self.value
    }
}
