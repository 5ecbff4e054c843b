//! HTTP response as seen by the Salesforce client: a status code and a raw body.

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Response returned by an [`HttpTransport`](crate::HttpTransport).
///
/// Non-success statuses are ordinary responses here; interpreting them is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    /// Create a response from its parts.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume the response and return the raw body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
