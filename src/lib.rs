//! # relay-sf-api
//!
//! A small Salesforce REST API client for Rust.
//!
//! Log in with the OAuth 2.0 username-password flow, then read and create
//! records over the REST API.
//!
//! ## Security
//!
//! - Passwords, client secrets and access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Transport error messages are sanitized before they are returned
//!
//! ## Crates
//!
//! - **relay-sf-client** - HTTP transport: request/response types, reqwest client, config
//! - **relay-sf-auth** - Authentication: password-flow token request, credentials, session
//! - **relay-sf-rest** - REST API: lazy login, GET/POST, SObject read, SOQL query
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_sf_api::{PasswordCredentials, SalesforceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // SF_USERNAME, SF_PASSWORD, SF_SECURITY_TOKEN, SF_CLIENT_ID, SF_CLIENT_SECRET
//!     let creds = PasswordCredentials::from_env()?;
//!     let client = SalesforceClient::new(creds)?;
//!
//!     let result = client.query("SELECT Id, Name FROM Account LIMIT 10").await?;
//!     for account in result["records"].as_array().into_iter().flatten() {
//!         println!("{}", account["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use relay_sf_auth as auth;
pub use relay_sf_client as client;
pub use relay_sf_rest as rest;

// Re-export commonly used types at the top level
pub use relay_sf_auth::{PasswordCredentials, Session};
pub use relay_sf_client::{ClientConfig, HttpTransport, SfHttpClient};
pub use relay_sf_rest::{categories, Error, ErrorKind, Logger, MemoryLogger, Result, SalesforceClient};
