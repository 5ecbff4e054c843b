//! Error types for relay-sf-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for relay-sf-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for relay-sf-auth operations.
///
/// Error messages are sanitized to prevent accidental credential exposure.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns the HTTP status if the token endpoint rejected the login.
    pub fn login_status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Login { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
///
/// Error messages avoid including credential values.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint answered with something other than 200.
    #[error("Error: call to URL {url} failed with status {status}")]
    Login { url: String, status: u16 },

    /// The token endpoint answered 200 but the token payload is unusable.
    #[error("Token invalid: {0}")]
    TokenInvalid(String),

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP transport error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<relay_sf_client::Error> for Error {
    fn from(err: relay_sf_client::Error) -> Self {
        let message = relay_sf_client::security::redact::sanitize(&err.to_string());
        Error::with_source(ErrorKind::Http(message), err)
    }
}
