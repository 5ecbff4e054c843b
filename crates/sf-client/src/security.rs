//! Security utilities shared by the relay Salesforce crates.
//!
//! ## URL Parameter Encoding
//!
//! User-provided values in URL paths and query strings MUST be encoded:
//!
//! ```rust
//! use relay_sf_client::security::url;
//!
//! let encoded_id = url::encode_param("001/test");
//! let path = format!("/services/data/v26.0/sobjects/Account/{}", encoded_id);
//! assert_eq!(path, "/services/data/v26.0/sobjects/Account/001%2Ftest");
//! ```
//!
//! ## Redaction
//!
//! Messages that may have picked up credentials (URLs with tokens, echoed
//! headers) go through [`redact::sanitize`] before they end up in an error.

/// URL encoding utilities.
pub mod url {
    /// Percent-encode a value for use as a single URL path segment or
    /// query parameter value.
    ///
    /// Spaces become `%20`, and reserved characters such as `/`, `?` and `&`
    /// are escaped so the value cannot break out of its position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relay_sf_client::security::url;
    ///
    /// assert_eq!(url::encode_param("SELECT Id FROM Account"), "SELECT%20Id%20FROM%20Account");
    /// assert_eq!(url::encode_param("001/../../secret"), "001%2F..%2F..%2Fsecret");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}

/// Credential redaction helpers.
pub mod redact {
    /// Placeholder used wherever a secret would otherwise be printed.
    pub const REDACTED: &str = "[REDACTED]";

    const SENSITIVE_MARKERS: &[&str] = &[
        "access_token",
        "token=",
        "Bearer",
        "password",
        "client_secret",
    ];

    /// Replace a message with a generic one if it looks like it carries
    /// credential material.
    #[must_use]
    pub fn sanitize(message: &str) -> String {
        if SENSITIVE_MARKERS.iter().any(|m| message.contains(m)) {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message.to_string()
        }
    }
}
