use civo_rs::{Application, ApplicationConfig, CivoError, PaginatedResponse, ProcessInfo};
use pretty_assertions::assert_eq;
use reqwest::Method;


use test_helpers::client_for_testing;

#[tokio::test]
async fn list_decodes_paginated_envelope() {
    let (client, _) = client_for_testing(&[(
        "/v2/applications",
        r#"{"page":1,"per_page":20,"pages":1,"items":[{
            "id": "69a23478-a89e-41d2-97b1-6f4c341cee70",
            "name": "your-app-name",
            "status": "ACTIVE",
            "account_id": "12345",
            "network_id": "34567",
            "process_info": [{"processType": "web", "processCount": 1}],
            "domains": ["your-app-name.example.com"]
        }]}"#,
    )]);

    let got = client.applications().list().await.unwrap();

    let expected = PaginatedResponse {
        page: 1,
        per_page: 20,
        pages: 1,
        items: vec![Application {
            id: "69a23478-a89e-41d2-97b1-6f4c341cee70".to_string(),
            name: "your-app-name".to_string(),
            status: "ACTIVE".to_string(),
            account_id: "12345".to_string(),
            network_id: "34567".to_string(),
            process_info: vec![ProcessInfo {
                process_type: "web".to_string(),
                process_count: 1,
            }],
            domains: vec!["your-app-name.example.com".to_string()],
            ..Default::default()
        }],
    };
    assert_eq!(got, expected);
}

#[tokio::test]
async fn list_missing_items_key_yields_empty_page() {
    let (client, _) = client_for_testing(&[(
        "/v2/applications",
        r#"{"page":1,"per_page":20,"pages":0}"#,
    )]);

    let page = client.applications().list().await.unwrap();
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn create_echoes_name() {
    let (client, stub) = client_for_testing(&[("/v2/applications", r#"{"name":"test-app"}"#)]);

    let config = ApplicationConfig {
        name: "test-app".to_string(),
        size: Some("small".to_string()),
        ..Default::default()
    };
    let app = client.applications().create(&config).await.unwrap();
    assert_eq!(app.name, "test-app");

    let request = stub.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.body.unwrap()["name"], "test-app");
}

#[tokio::test]
async fn get_scans_items_for_exact_name() {
    let (client, _) = client_for_testing(&[(
        "/v2/applications",
        r#"{"page":1,"per_page":20,"pages":1,"items":[
            {"id":"a1","name":"frontend"},
            {"id":"a2","name":"backend"}]}"#,
    )]);

    let app = client.applications().get("backend").await.unwrap();
    assert_eq!(app.id, "a2");

    let err = client.applications().get("worker").await.unwrap_err();
    assert!(matches!(
        err,
        CivoError::NotFound { resource: "application", .. }
    ));
}

#[tokio::test]
async fn update_puts_to_item_path() {
    let (client, stub) = client_for_testing(&[(
        "/v2/applications/a1",
        r#"{"id":"a1","name":"frontend","size":"medium"}"#,
    )]);

    let config = ApplicationConfig {
        name: "frontend".to_string(),
        size: Some("medium".to_string()),
        ..Default::default()
    };
    let app = client.applications().update("a1", &config).await.unwrap();
    assert_eq!(app.size, "medium");

    let request = stub.last_request();
    assert_eq!(request.method, Method::PUT);
    assert!(request.url.ends_with("/v2/applications/a1"));
}

#[tokio::test]
async fn update_empty_id_fails_before_any_request() {
    let (client, stub) = client_for_testing(&[]);

    let config = ApplicationConfig::default();
    let err = client.applications().update("", &config).await.unwrap_err();
    assert!(matches!(err, CivoError::Validation(_)));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn delete_decodes_simple_response() {
    let (client, stub) = client_for_testing(&[("/v2/applications/a1", r#"{"result":"success"}"#)]);

    let response = client.applications().delete("a1").await.unwrap();
    assert!(response.is_success());
    assert_eq!(stub.last_request().method, Method::DELETE);
}

#[tokio::test]
async fn delete_empty_id_fails_before_any_request() {
    let (client, stub) = client_for_testing(&[]);

    let err = client.applications().delete("").await.unwrap_err();
    assert!(matches!(err, CivoError::Validation(_)));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn delete_failure_envelope_surfaces_error_fields() {
    let (client, _) = client_for_testing(&[(
        "/v2/applications/a1",
        r#"{"result":"failed","error_code":"instance_busy","error_reason":"still deploying"}"#,
    )]);

    let response = client.applications().delete("a1").await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.error_code.as_deref(), Some("instance_busy"));
    assert_eq!(response.error_reason.as_deref(), Some("still deploying"));
}
