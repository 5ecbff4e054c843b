use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::instrument;

use relay_sf_auth::Session;
use relay_sf_client::{HttpRequest, HttpTransport, RequestMethod};

use crate::error::{Error, ErrorKind, Result};
use crate::logger::categories;

impl<T: HttpTransport> super::SalesforceClient<T> {
    /// GET an endpoint and return the decoded JSON body.
    ///
    /// `endpoint` is appended to the instance URL, e.g.
    /// `/services/data/v26.0/sobjects/Account/001xx000003DGb2AAG`. Logs in
    /// first if needed. Only status 200 counts as success.
    #[instrument(skip(self))]
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.get_json(endpoint).await
    }

    /// GET an endpoint and deserialize the body into `R`.
    #[instrument(skip(self))]
    pub async fn get_json<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        let session = self.session_or_login().await?;
        self.execute_get(&session, endpoint).await
    }

    /// POST a JSON body to an endpoint and return the `id` of the created
    /// record.
    ///
    /// Logs in first if needed. Only status 201 counts as success.
    #[instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<String> {
        let session = self.session_or_login().await?;
        self.execute_post(&session, endpoint, body).await
    }

    /// Call `get` or `post` by name.
    ///
    /// `method` is matched case-insensitively. A POST returns the created id
    /// as a JSON string; a missing `body` posts `null`.
    ///
    /// # Panics
    ///
    /// Panics on any method name other than `get` or `post`. No login or
    /// HTTP request happens in that case.
    pub async fn call(&self, method: &str, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        if method.eq_ignore_ascii_case("get") {
            self.get(endpoint).await
        } else if method.eq_ignore_ascii_case("post") {
            let id = self.post(endpoint, body.unwrap_or(&Value::Null)).await?;
            Ok(Value::String(id))
        } else {
            panic!("unsupported Salesforce client operation `{method}`: only `get` and `post` can be called");
        }
    }

    async fn execute_get<R: DeserializeOwned>(&self, session: &Session, endpoint: &str) -> Result<R> {
        let url = session.url(endpoint);
        let request = authorized(HttpRequest::get(&url), session);
        let response = self.transport.send(request).await?;

        if response.status() != 200 {
            return Err(self.status_failure(RequestMethod::Get, url, response.status()));
        }

        Ok(response.json()?)
    }

    async fn execute_post<B: Serialize + ?Sized>(
        &self,
        session: &Session,
        endpoint: &str,
        body: &B,
    ) -> Result<String> {
        let url = session.url(endpoint);
        let payload = serde_json::to_string(body)
            .map_err(|e| Error::with_source(ErrorKind::Serialization(e.to_string()), e))?;
        let request = authorized(HttpRequest::post(&url), session).body(payload);
        let response = self.transport.send(request).await?;

        if response.status() != 201 {
            return Err(self.status_failure(RequestMethod::Post, url, response.status()));
        }

        let created: Value = response.json()?;
        created
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| Error::new(ErrorKind::MissingField("id".to_string())))
    }

    fn status_failure(&self, method: RequestMethod, url: String, status: u16) -> Error {
        let category = match method {
            RequestMethod::Get => categories::GET_ERROR,
            RequestMethod::Post => categories::POST_ERROR,
        };
        let err = Error::new(ErrorKind::Request {
            method,
            url,
            status,
        });
        self.logger.log(category, &err.to_string());
        err
    }
}

fn authorized(request: HttpRequest, session: &Session) -> HttpRequest {
    request
        .bearer_auth(session.access_token())
        .header("Content-type", "application/json")
}
