//! Error types for relay-sf-rest.

use relay_sf_client::RequestMethod;

/// Result type alias for relay-sf-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for relay-sf-rest operations.
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

    /// Returns true if the call failed because the client could not log in.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Login { .. } | ErrorKind::Auth(_))
    }

    /// The unexpected HTTP status, for login and request failures.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Login { status, .. } | ErrorKind::Request { status, .. } => Some(status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint did not answer 200.
    #[error("Error: call to URL {url} failed with status {status}")]
    Login { url: String, status: u16 },

    /// Login failed for a reason other than the token endpoint status.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A resource call answered with an unexpected status
    /// (anything but 200 for GET, anything but 201 for POST).
    #[error("Error: call to URL {url} failed with status {status}")]
    Request {
        method: RequestMethod,
        url: String,
        status: u16,
    },

    /// A successful response lacked a field the client needs.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// A response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// A request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Transport error from relay-sf-client.
    #[error("Client error: {0}")]
    Client(String),
}

impl From<relay_sf_auth::Error> for Error {
    fn from(err: relay_sf_auth::Error) -> Self {
        let kind = match err.kind {
            relay_sf_auth::ErrorKind::Login { ref url, status } => ErrorKind::Login {
                url: url.clone(),
                status,
            },
            _ => ErrorKind::Auth(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<relay_sf_client::Error> for Error {
    fn from(err: relay_sf_client::Error) -> Self {
        let kind = match err.kind {
            relay_sf_client::ErrorKind::Json(ref message) => ErrorKind::Json(message.clone()),
            _ => ErrorKind::Client(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
