//! Username-password flow credentials.
//!
//! Debug output redacts every secret field.

use relay_sf_client::security::redact::REDACTED;

use crate::error::{Error, ErrorKind, Result};
use crate::{PRODUCTION_LOGIN_URL, TOKEN_PATH};

/// Everything needed to run the OAuth 2.0 username-password flow against a
/// connected app.
///
/// Immutable once built. The security token is appended to the password,
/// with no separator, when the token request is made.
#[derive(Clone)]
pub struct PasswordCredentials {
    username: String,
    password: String,
    security_token: String,
    client_id: String,
    client_secret: String,
    login_url: String,
    token_url: String,
}

impl std::fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("security_token", &REDACTED)
            .field("client_id", &self.client_id)
            .field("client_secret", &REDACTED)
            .field("token_url", &self.token_url)
            .finish()
    }
}

impl PasswordCredentials {
    /// Create credentials.
    ///
    /// `login_url` is the login host (e.g. [`PRODUCTION_LOGIN_URL`]); the
    /// token endpoint is derived from it.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        security_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        login_url: impl Into<String>,
    ) -> Self {
        let login_url = login_url.into().trim_end_matches('/').to_string();
        let token_url = format!("{}{}", login_url, TOKEN_PATH);
        Self {
            username: username.into(),
            password: password.into(),
            security_token: security_token.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            login_url,
            token_url,
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Required environment variables:
    /// - `SF_USERNAME` or `SALESFORCE_USERNAME`
    /// - `SF_PASSWORD` or `SALESFORCE_PASSWORD`
    /// - `SF_CLIENT_ID` or `SALESFORCE_CLIENT_ID`
    /// - `SF_CLIENT_SECRET` or `SALESFORCE_CLIENT_SECRET`
    ///
    /// Optional:
    /// - `SF_SECURITY_TOKEN` or `SALESFORCE_SECURITY_TOKEN` (default: empty)
    /// - `SF_LOGIN_URL` or `SALESFORCE_LOGIN_URL` (default: production login)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |suffix: &str| {
            lookup(&format!("SF_{suffix}")).or_else(|| lookup(&format!("SALESFORCE_{suffix}")))
        };
        let required = |suffix: &str| {
            var(suffix).ok_or_else(|| Error::new(ErrorKind::EnvVar(format!("SF_{suffix}"))))
        };

        let username = required("USERNAME")?;
        let password = required("PASSWORD")?;
        let client_id = required("CLIENT_ID")?;
        let client_secret = required("CLIENT_SECRET")?;
        let security_token = var("SECURITY_TOKEN").unwrap_or_default();
        let login_url = var("LOGIN_URL").unwrap_or_else(|| PRODUCTION_LOGIN_URL.to_string());

        if !login_url.starts_with("http://") && !login_url.starts_with("https://") {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "login URL must start with http:// or https://".to_string(),
            )));
        }

        Ok(Self::new(
            username,
            password,
            security_token,
            client_id,
            client_secret,
            login_url,
        ))
    }

    /// The username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The connected app's consumer key.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The login host, without trailing slash.
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// The OAuth 2.0 token endpoint.
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Password with the security token appended.
    pub(crate) fn password_with_token(&self) -> String {
        format!("{}{}", self.password, self.security_token)
    }
}
