//! An authenticated Salesforce session.

use relay_sf_client::security::redact::REDACTED;

/// Access token plus the instance URL it is bound to.
///
/// Both values are non-empty; [`TokenResponse::into_session`](crate::TokenResponse::into_session)
/// refuses to build a session otherwise. The access token is redacted in
/// Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    access_token: String,
    instance_url: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &REDACTED)
            .field("instance_url", &self.instance_url)
            .finish()
    }
}

impl Session {
    pub(crate) fn new(access_token: String, instance_url: String) -> Self {
        Self {
            access_token,
            instance_url,
        }
    }

    /// The bearer token to send with API calls.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Base URL of the org this session belongs to, as returned by the
    /// token endpoint.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Resolve an endpoint path against the instance URL.
    ///
    /// The path is appended verbatim; callers pass paths that start with `/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.instance_url, endpoint)
    }
}
