//! REST calls through the facade against a mock org.

use std::sync::{Arc, Mutex};

use super::common::{client, mount_login, ACCESS_TOKEN};
use relay_sf_api::{categories, ErrorKind, Logger};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// SObject / Query
// ============================================================================

#[tokio::test]
async fn test_sobject_read_after_lazy_login() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v26.0/sobjects/Account/001xx000003DGb2AAG"))
        .and(header("Authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": {
                "type": "Account",
                "url": "/services/data/v26.0/sobjects/Account/001xx000003DGb2AAG"
            },
            "Id": "001xx000003DGb2AAG",
            "Name": "Acme"
        })))
        .expect(2)
        .mount(&server)
        .await;

    let (client, logger) = client(&server);

    let first = client
        .sobject("Account", "001xx000003DGb2AAG")
        .await
        .expect("sobject read should succeed");
    let second = client
        .sobject("Account", "001xx000003DGb2AAG")
        .await
        .expect("sobject read should succeed");

    assert_eq!(first["Name"], "Acme");
    assert_eq!(first, second);
    assert!(logger.events().is_empty());
}

#[tokio::test]
async fn test_query_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    let result = json!({
        "totalSize": 2,
        "done": true,
        "records": [
            {"attributes": {"type": "Account"}, "Id": "001A", "Name": "Alpha"},
            {"attributes": {"type": "Account"}, "Id": "001B", "Name": "Beta"}
        ]
    });

    Mock::given(method("GET"))
        .and(path("/services/data/v26.0/query/"))
        .and(query_param("q", "SELECT Id, Name FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(result.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _logger) = client(&server);
    let value = client
        .query("SELECT Id, Name FROM Account")
        .await
        .expect("query should succeed");

    assert_eq!(value, result);
}

#[tokio::test]
async fn test_missing_record_logs_get_error() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/services/data/v26.0/sobjects/Account/001missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!([{
            "errorCode": "NOT_FOUND",
            "message": "The requested resource does not exist"
        }])))
        .mount(&server)
        .await;

    let (client, logger) = client(&server);
    let err = client
        .sobject("Account", "001missing")
        .await
        .expect_err("404 should fail");

    assert!(matches!(err.kind, ErrorKind::Request { status: 404, .. }));
    let events = logger.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].category, "Salesforce Get Error");
    assert_eq!(
        events[0].message,
        format!(
            "Error: call to URL {}/services/data/v26.0/sobjects/Account/001missing failed with status 404",
            server.uri()
        )
    );
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_returns_new_id() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/services/data/v26.0/sobjects/Account"))
        .and(header("Content-type", "application/json"))
        .and(body_json(json!({"Name": "Acme"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001xx000003DGb2AAG",
            "errors": [],
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, logger) = client(&server);
    let id = client
        .post("/services/data/v26.0/sobjects/Account", &json!({"Name": "Acme"}))
        .await
        .expect("create should succeed");

    assert_eq!(id, "001xx000003DGb2AAG");
    assert!(logger.events().is_empty());
}

#[tokio::test]
async fn test_rejected_create_logs_post_error() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/services/data/v26.0/sobjects/Account"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let (client, logger) = client(&server);
    let err = client
        .post("/services/data/v26.0/sobjects/Account", &json!({}))
        .await
        .expect_err("400 should fail");

    assert_eq!(err.status(), Some(400));
    assert_eq!(logger.count(categories::POST_ERROR), 1);
    assert_eq!(logger.count(categories::GET_ERROR), 0);
}

// ============================================================================
// Dispatch by name
// ============================================================================

#[tokio::test]
async fn test_call_by_name() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/services/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"version": "26.0", "url": "/services/data/v26.0"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/services/data/v26.0/sobjects/Contact"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "003xx"})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _logger) = client(&server);

    let versions = client.call("Get", "/services/data/", None).await.unwrap();
    assert_eq!(versions[0]["version"], "26.0");

    let body = json!({"LastName": "Doe"});
    let id = client
        .call("post", "/services/data/v26.0/sobjects/Contact", Some(&body))
        .await
        .unwrap();
    assert_eq!(id, json!("003xx"));
}

#[tokio::test]
#[should_panic(expected = "unsupported Salesforce client operation")]
async fn test_call_unknown_operation_panics_before_login() {
    let server = MockServer::start().await;
    mount_login(&server, 0).await;

    let (client, _logger) = client(&server);
    let _ = client.call("patch", "/services/data/v26.0/sobjects/Account/001", None).await;
}

// ============================================================================
// Custom logger
// ============================================================================

#[tokio::test]
async fn test_closure_logger_receives_events() {
    let server = MockServer::start().await;
    mount_login(&server, 1).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let seen: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = seen.clone();
    let logger: Arc<dyn Logger> = Arc::new(move |category: &str, message: &str| {
        sink.lock().unwrap().push(format!("{category}: {message}"));
    });

    let (client, _memory) = client(&server);
    let client = client.with_logger(logger);

    assert!(client.get("/services/data/v26.0/limits").await.is_err());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("Salesforce Get Error: Error: call to URL "));
    assert!(seen[0].ends_with("/services/data/v26.0/limits failed with status 500"));
}
