//! # relay-sf-rest
//!
//! Minimal Salesforce REST API client.
//!
//! ## Features
//!
//! - **Lazy login** - the first call runs the OAuth 2.0 username-password
//!   flow; later calls reuse the session
//! - **GET / POST** - authenticated calls against any REST endpoint
//! - **SObject read** - fetch a record by type and id
//! - **SOQL query** - run a query and get the raw JSON result
//! - **Failure logging** - status failures are reported to a pluggable
//!   [`Logger`] as well as returned as errors
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_sf_auth::PasswordCredentials;
//! use relay_sf_rest::SalesforceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), relay_sf_rest::Error> {
//!     let client = SalesforceClient::new(PasswordCredentials::from_env()?)?;
//!
//!     let account = client.sobject("Account", "001xx000003DGb2AAG").await?;
//!     println!("{}", account["Name"]);
//!
//!     let result = client.query("SELECT Id, Name FROM Account LIMIT 10").await?;
//!     println!("{} records", result["totalSize"]);
//!
//!     let id = client
//!         .post("/services/data/v26.0/sobjects/Account", &serde_json::json!({"Name": "Acme"}))
//!         .await?;
//!     println!("created {id}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod logger;

pub use client::{query_path, sobject_path, SalesforceClient};
pub use error::{Error, ErrorKind, Result};
pub use logger::{categories, LogEvent, Logger, MemoryLogger, TracingLogger};

// Re-export the types callers need to build a client
pub use relay_sf_auth::{PasswordCredentials, Session};
pub use relay_sf_client::{ClientConfig, ClientConfigBuilder, HttpTransport, SfHttpClient};
