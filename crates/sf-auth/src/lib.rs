//! # relay-sf-auth
//!
//! Salesforce authentication using the OAuth 2.0 username-password flow.
//!
//! ## Security
//!
//! - Passwords, security tokens, client secrets and access tokens are
//!   redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages never echo credential values
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_sf_auth::{PasswordCredentials, PasswordFlowAuth};
//! use relay_sf_client::SfHttpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), relay_sf_auth::Error> {
//!     let creds = PasswordCredentials::from_env()?;
//!     let transport = SfHttpClient::default_client()?;
//!
//!     let session = PasswordFlowAuth::new(creds)
//!         .authenticate(&transport)
//!         .await?
//!         .into_session()?;
//!
//!     println!("Logged in to {}", session.instance_url());
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod oauth;
mod session;

pub use credentials::PasswordCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{PasswordFlowAuth, TokenResponse};
pub use session::Session;

/// Default Salesforce login URL for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Default Salesforce login URL for sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";

/// Path of the OAuth 2.0 token endpoint, relative to the login URL.
pub const TOKEN_PATH: &str = "/services/oauth2/token";
