//! Login behaviour seen through the public client.

use super::common::{client, credentials, mount_login, ACCESS_TOKEN};
use relay_sf_api::auth::{PasswordFlowAuth, SANDBOX_LOGIN_URL};
use relay_sf_api::{categories, SalesforceClient, SfHttpClient};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_token_request_is_password_grant_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=password&client_id=3MVG9consumer&client_secret=consumer_secret\
             &username=integration%40example.com&password=hunter2XYZTOKEN",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": ACCESS_TOKEN,
            "instance_url": server.uri()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, logger) = client(&server);
    client.authenticate().await.expect("login should succeed");

    let session = client.session().await.expect("session after login");
    assert_eq!(session.access_token(), ACCESS_TOKEN);
    assert_eq!(session.instance_url(), server.uri());
    assert!(logger.events().is_empty());
}

#[tokio::test]
async fn test_no_login_until_first_call() {
    let server = MockServer::start().await;
    mount_login(&server, 0).await;

    let (client, _logger) = client(&server);
    assert!(!client.is_authenticated().await);
    assert!(client.session().await.is_none());
}

#[tokio::test]
async fn test_rejected_login_is_logged_and_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "authentication failure"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (client, logger) = client(&server);

    let err = client
        .sobject("Account", "001xx000003DGb2AAG")
        .await
        .expect_err("login should fail");
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(400));

    // Still unauthenticated, so the next call tries again
    let err = client.query("SELECT Id FROM Account").await.expect_err("login should fail");
    assert!(err.is_auth_error());

    let events = logger.events();
    assert_eq!(events.len(), 2);
    for event in events {
        assert_eq!(event.category, categories::LOGIN_ERROR);
        assert_eq!(
            event.message,
            format!(
                "Error: call to URL {}/services/oauth2/token failed with status 400",
                server.uri()
            )
        );
    }
}

#[tokio::test]
async fn test_password_flow_usable_on_its_own() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    let auth = PasswordFlowAuth::new(credentials(&server));
    let transport = SfHttpClient::default_client().expect("Failed to create transport");

    let token = auth.authenticate(&transport).await.expect("login should succeed");
    assert_eq!(token.token_type.as_deref(), Some("Bearer"));

    let session = token.into_session().expect("complete token response");
    assert_eq!(session.access_token(), ACCESS_TOKEN);
}

#[test]
fn test_sandbox_login_url() {
    let creds = relay_sf_api::PasswordCredentials::new(
        "user@example.com.sandbox",
        "pw",
        "",
        "id",
        "secret",
        SANDBOX_LOGIN_URL,
    );
    let client = SalesforceClient::new(creds).expect("Failed to create client");
    assert_eq!(
        client.token_url(),
        "https://test.salesforce.com/services/oauth2/token"
    );
}
