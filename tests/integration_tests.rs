mod common;

use axum::http::{Method, StatusCode};

use common::{read_json, TestApp};

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "up");

    let response = app.request(Method::GET, "/health/ready", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "up");
    assert_eq!(body["details"]["tracking_directory_records"], 2);
    assert_eq!(body["details"]["registry_shipments"], 2);
}

#[tokio::test]
async fn root_banner_documents_the_demo_data() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["service"], "shipco-api");
    let numbers = body["demo_tracking_numbers"].as_array().unwrap();
    assert_eq!(numbers.len(), 2);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = TestApp::new();

    let response = app
        .request(Method::GET, "/api-docs/openapi.json", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["info"]["title"], "ShipCo API");
    assert!(body["paths"]["/api/v1/tracking/{tracking_number}"].is_object());
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/api/v1/nope", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
