//! # relay-sf-client
//!
//! HTTP transport layer for the relay Salesforce client.
//!
//! This crate provides:
//! - [`HttpTransport`], the seam between the Salesforce client and whatever
//!   actually moves bytes over the network
//! - [`SfHttpClient`], the default transport backed by `reqwest`
//! - Plain request/response types ([`HttpRequest`], [`HttpResponse`])
//! - Transport configuration ([`ClientConfig`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SalesforceClient                         │
//! │  (relay-sf-rest: lazy auth, get/post, sobject/query)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  HttpTransport (trait)                      │
//! │  - send(HttpRequest) -> HttpResponse                        │
//! │  - status + raw body, no interpretation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    SfHttpClient                             │
//! │  - reqwest, timeouts, user agent, request tracing           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use relay_sf_client::{HttpRequest, HttpTransport, SfHttpClient};
//!
//! let transport = SfHttpClient::default_client()?;
//! let response = transport
//!     .send(HttpRequest::get("https://na1.salesforce.com/services/data/"))
//!     .await?;
//! println!("{} {}", response.status(), response.body());
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
pub mod security;
mod transport;

pub use client::SfHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{HttpRequest, RequestMethod};
pub use response::HttpResponse;
pub use transport::HttpTransport;

/// Default Salesforce REST API version used for resource paths.
pub const DEFAULT_API_VERSION: &str = "26.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("relay-sf-api/", env!("CARGO_PKG_VERSION"));
