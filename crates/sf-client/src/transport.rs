//! The transport seam.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::request::HttpRequest;
use crate::response::HttpResponse;

/// Something that can send an [`HttpRequest`] and hand back the status and
/// body of the response.
///
/// Implementations own connection handling, TLS, timeouts and redirects.
/// A non-2xx status is NOT an error at this level; `Err` is reserved for
/// requests that produced no response at all.
pub trait HttpTransport: Send + Sync {
    /// Send a request and wait for the full response body.
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

impl<T: HttpTransport> HttpTransport for Arc<T> {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse>> + Send {
        (**self).send(request)
    }
}
