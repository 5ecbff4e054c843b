//! OAuth 2.0 username-password flow.
//!
//! The flow exchanges username, password (with the security token appended)
//! and connected app credentials for an access token in a single form POST.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use relay_sf_client::security::redact::REDACTED;
use relay_sf_client::{HttpRequest, HttpTransport};

use crate::credentials::PasswordCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::session::Session;

/// Username-password OAuth flow.
#[derive(Clone)]
pub struct PasswordFlowAuth {
    credentials: PasswordCredentials,
}

impl std::fmt::Debug for PasswordFlowAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordFlowAuth")
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl PasswordFlowAuth {
    /// Create a new password flow authenticator.
    pub fn new(credentials: PasswordCredentials) -> Self {
        Self { credentials }
    }

    /// The credentials this flow logs in with.
    pub fn credentials(&self) -> &PasswordCredentials {
        &self.credentials
    }

    /// The token endpoint this flow posts to.
    pub fn token_url(&self) -> &str {
        self.credentials.token_url()
    }

    /// Build the token request.
    ///
    /// Fields are sent in the order `grant_type`, `client_id`,
    /// `client_secret`, `username`, `password`.
    pub fn token_request(&self) -> Result<HttpRequest> {
        let password = self.credentials.password_with_token();
        let params = [
            ("grant_type", "password"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
            ("username", self.credentials.username()),
            ("password", password.as_str()),
        ];

        let body = serde_urlencoded::to_string(params)?;

        Ok(HttpRequest::post(self.credentials.token_url())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body))
    }

    /// Run the flow: post the credentials and decode the token response.
    ///
    /// Any status other than 200 is reported as [`ErrorKind::Login`].
    #[instrument(skip(self, transport), fields(token_url = %self.credentials.token_url()))]
    pub async fn authenticate<T: HttpTransport>(&self, transport: &T) -> Result<TokenResponse> {
        let request = self.token_request()?;
        let response = transport.send(request).await?;

        if response.status() != 200 {
            return Err(Error::new(ErrorKind::Login {
                url: self.credentials.token_url().to_string(),
                status: response.status(),
            }));
        }

        let token: TokenResponse = serde_json::from_str(response.body())?;
        info!(instance_url = %token.instance_url, "Salesforce login succeeded");
        Ok(token)
    }
}

/// Token response from the OAuth token endpoint.
///
/// Sensitive fields are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Instance URL.
    pub instance_url: String,
    /// User ID URL.
    #[serde(default)]
    pub id: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Issued at timestamp.
    #[serde(default)]
    pub issued_at: Option<String>,
    /// Signature for verification.
    #[serde(default)]
    pub signature: Option<String>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &REDACTED)
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("token_type", &self.token_type)
            .field("issued_at", &self.issued_at)
            .field("signature", &self.signature.as_ref().map(|_| REDACTED))
            .finish()
    }
}

impl TokenResponse {
    /// Turn the response into a session.
    ///
    /// Fails if either the access token or the instance URL is empty. A
    /// trailing slash on the instance URL is dropped so endpoint paths can
    /// be appended directly.
    pub fn into_session(self) -> Result<Session> {
        if self.access_token.is_empty() {
            return Err(Error::new(ErrorKind::TokenInvalid(
                "empty access_token in token response".to_string(),
            )));
        }
        let instance_url = self.instance_url.trim_end_matches('/');
        if instance_url.is_empty() {
            return Err(Error::new(ErrorKind::TokenInvalid(
                "empty instance_url in token response".to_string(),
            )));
        }
        Ok(Session::new(self.access_token, instance_url.to_string()))
    }
}
