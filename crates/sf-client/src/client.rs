//! Default transport backed by reqwest.

use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::HttpRequest;
use crate::response::HttpResponse;
use crate::transport::HttpTransport;

/// HTTP transport for Salesforce APIs built on `reqwest`.
#[derive(Debug, Clone)]
pub struct SfHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl SfHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Execute a single request.
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = url::Url::parse(request.url())?;

        let mut req = self.inner.request(request.method().to_reqwest(), url);

        for (name, value) in request.headers() {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body_text() {
            req = req.body(body.to_string());
        }

        if self.config.enable_tracing {
            debug!("Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        let body = response.text().await?;
        Ok(HttpResponse::new(status, body))
    }
}

impl HttpTransport for SfHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.execute(request).await
    }
}
