//! Salesforce REST API client.
//!
//! `SalesforceClient` owns the login credentials, an HTTP transport, a
//! logger and the session. Every resource call goes through
//! [`SalesforceClient::session_or_login`], which logs in on first use.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{instrument, warn};

use relay_sf_auth::{PasswordCredentials, PasswordFlowAuth, Session};
use relay_sf_client::{ClientConfig, HttpTransport, SfHttpClient, DEFAULT_API_VERSION};

use crate::error::{ErrorKind, Result};
use crate::logger::{categories, Logger, TracingLogger};

mod execute;
mod resources;

pub use resources::{query_path, sobject_path};

/// Salesforce REST API client using the username-password OAuth flow.
///
/// The client starts unauthenticated. The first `get`/`post` (or helper
/// built on them) logs in; the session is then kept for the life of the
/// client and never refreshed.
///
/// Login is single-flight: the session lock is held while the token request
/// is in flight, so concurrent first calls on a shared client produce one
/// token request.
///
/// # Example
///
/// ```rust,ignore
/// use relay_sf_rest::{PasswordCredentials, SalesforceClient};
///
/// let creds = PasswordCredentials::new(
///     "user@example.com", "password", "SECURITYTOKEN",
///     "consumer_key", "consumer_secret", "https://login.salesforce.com",
/// );
/// let client = SalesforceClient::new(creds)?;
///
/// let account = client.sobject("Account", "001xx000003DGb2AAG").await?;
/// let id = client
///     .post("/services/data/v26.0/sobjects/Contact", &json!({"LastName": "Doe"}))
///     .await?;
/// ```
pub struct SalesforceClient<T = SfHttpClient> {
    transport: T,
    auth: PasswordFlowAuth,
    logger: Arc<dyn Logger>,
    session: Mutex<Option<Session>>,
    api_version: String,
}

impl<T> std::fmt::Debug for SalesforceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesforceClient")
            .field("auth", &self.auth)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SalesforceClient {
    /// Create a client with the default reqwest transport.
    pub fn new(credentials: PasswordCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with a custom transport configuration.
    pub fn with_config(credentials: PasswordCredentials, config: ClientConfig) -> Result<Self> {
        let transport = SfHttpClient::new(config)?;
        Ok(Self::with_transport(credentials, transport))
    }
}

impl<T: HttpTransport> SalesforceClient<T> {
    /// Create a client on top of any [`HttpTransport`].
    pub fn with_transport(credentials: PasswordCredentials, transport: T) -> Self {
        Self {
            transport,
            auth: PasswordFlowAuth::new(credentials),
            logger: Arc::new(TracingLogger),
            session: Mutex::new(None),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Replace the logger that receives failure events.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set the API version used by [`sobject`](Self::sobject) and
    /// [`query`](Self::query) (e.g., "26.0").
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Get the OAuth token endpoint.
    pub fn token_url(&self) -> &str {
        self.auth.token_url()
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns true once a login has succeeded.
    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_some()
    }

    /// A copy of the current session, if logged in.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    /// Log in now.
    ///
    /// Always sends a token request, even when already logged in; on
    /// success the new session replaces the old one. On failure the
    /// existing session (if any) is left untouched.
    #[instrument(skip(self), fields(token_url = %self.auth.token_url()))]
    pub async fn authenticate(&self) -> Result<()> {
        let mut guard = self.session.lock().await;
        let session = self.login().await?;
        *guard = Some(session);
        Ok(())
    }

    /// Return the current session, logging in first if there is none.
    pub(crate) async fn session_or_login(&self) -> Result<Session> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }

        let session = self.login().await?;
        *guard = Some(session.clone());
        Ok(session)
    }

    async fn login(&self) -> Result<Session> {
        match self.auth.authenticate(&self.transport).await {
            Ok(token) => Ok(token.into_session()?),
            Err(err) => {
                let err = crate::Error::from(err);
                match err.kind {
                    ErrorKind::Login { .. } => {
                        self.logger.log(categories::LOGIN_ERROR, &err.to_string());
                    }
                    _ => warn!(error = %err, "Salesforce login failed"),
                }
                Err(err)
            }
        }
    }
}
