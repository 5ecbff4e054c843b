use std::sync::Arc;

use relay_sf_api::{ClientConfig, MemoryLogger, PasswordCredentials, SalesforceClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "00Dxx0000001gPL!AR8AQJXg5oj8jXSgxJfA0lBog";

/// Credentials whose login host is the mock server.
pub fn credentials(server: &MockServer) -> PasswordCredentials {
    PasswordCredentials::new(
        "integration@example.com",
        "hunter2",
        "XYZTOKEN",
        "3MVG9consumer",
        "consumer_secret",
        server.uri(),
    )
}

/// A client pointed at the mock server that records log events in memory.
pub fn client(server: &MockServer) -> (SalesforceClient, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let config = ClientConfig::builder().with_tracing(false).build();
    let client = SalesforceClient::with_config(credentials(server), config)
        .expect("Failed to create client")
        .with_logger(logger.clone());
    (client, logger)
}

/// Mount a token endpoint that succeeds `expected_calls` times; the
/// instance URL is the mock server itself.
pub async fn mount_login(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": ACCESS_TOKEN,
            "instance_url": server.uri(),
            "id": "https://login.salesforce.com/id/00Dxx0000001gPLEAY/005xx000001SwiUAAS",
            "token_type": "Bearer",
            "issued_at": "1278448832702",
            "signature": "0CmxinZir53Yex7nE0TD+zMpvIWYGb/bdJh6XfOH6EQ="
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}
