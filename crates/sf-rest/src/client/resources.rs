use serde_json::Value;
use tracing::instrument;

use relay_sf_client::security::url::encode_param;
use relay_sf_client::HttpTransport;

use crate::error::Result;

/// Build the REST path for one SObject record.
///
/// Both `sobject_type` and `id` are percent-encoded as single path segments.
pub fn sobject_path(api_version: &str, sobject_type: &str, id: &str) -> String {
    format!(
        "/services/data/v{}/sobjects/{}/{}",
        api_version,
        encode_param(sobject_type),
        encode_param(id)
    )
}

/// Build the REST path for a SOQL query.
pub fn query_path(api_version: &str, soql: &str) -> String {
    format!("/services/data/v{}/query/?q={}", api_version, encode_param(soql))
}

impl<T: HttpTransport> super::SalesforceClient<T> {
    /// Fetch one SObject record by type and id.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let account = client.sobject("Account", "001xx000003DGb2AAG").await?;
    /// println!("{}", account["Name"]);
    /// ```
    #[instrument(skip(self))]
    pub async fn sobject(&self, sobject_type: &str, id: &str) -> Result<Value> {
        self.get(&sobject_path(&self.api_version, sobject_type, id))
            .await
    }

    /// Run a SOQL query and return the raw result.
    ///
    /// Only the first page is returned; `nextRecordsUrl` is left for the
    /// caller to follow with [`get`](Self::get).
    #[instrument(skip(self))]
    pub async fn query(&self, soql: &str) -> Result<Value> {
        self.get(&query_path(&self.api_version, soql)).await
    }
}
