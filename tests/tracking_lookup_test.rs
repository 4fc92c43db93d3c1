mod common;

use axum::http::{Method, StatusCode};
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use common::{read_json, TestApp};

async fn lookup(app: &TestApp, path: &str) -> (StatusCode, Value) {
    let response = app.request(Method::GET, path, None, None).await;
    let status = response.status();
    (status, read_json(response).await)
}

#[tokio::test]
async fn unknown_tracking_number_returns_not_found_with_the_typed_input() {
    let app = TestApp::new();

    let (status, body) = lookup(&app, "/api/v1/tracking/SHP000000").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("SHP000000"));
}

#[tokio::test]
async fn miss_message_preserves_the_original_casing() {
    let app = TestApp::new();

    let (status, body) = lookup(&app, "/api/v1/tracking/shp999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    // The message must echo what was typed, not the normalized form.
    assert!(body["message"].as_str().unwrap().contains("shp999999"));
}

#[tokio::test]
async fn canned_records_return_full_history_newest_first() {
    let app = TestApp::new();

    for number in ["SHP123456", "SHP789012"] {
        let (status, body) = lookup(&app, &format!("/api/v1/tracking/{}", number)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let record = &body["data"];
        assert_eq!(record["tracking_number"], number);

        let updates = record["updates"].as_array().unwrap();
        assert!(!updates.is_empty());

        let timestamps: Vec<_> = updates
            .iter()
            .map(|u| {
                let date: NaiveDate = u["date"].as_str().unwrap().parse().unwrap();
                let time: NaiveTime = u["time"].as_str().unwrap().parse().unwrap();
                date.and_time(time)
            })
            .collect();
        for pair in timestamps.windows(2) {
            assert!(pair[0] >= pair[1], "history must be newest-first");
        }
    }
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let app = TestApp::new();

    let (upper_status, upper) = lookup(&app, "/api/v1/tracking/SHP123456").await;
    let (lower_status, lower) = lookup(&app, "/api/v1/tracking/shp123456").await;

    assert_eq!(upper_status, StatusCode::OK);
    assert_eq!(lower_status, StatusCode::OK);
    assert_eq!(upper["data"], lower["data"]);
}

#[tokio::test]
async fn query_form_lookup_matches_the_path_form() {
    let app = TestApp::new();

    let (status, body) = lookup(&app, "/api/v1/tracking?number=shp789012").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["tracking_number"], "SHP789012");
    assert_eq!(body["data"]["status"], "Delivered");
}

#[tokio::test]
async fn missing_or_empty_number_fails_before_any_lookup() {
    let app = TestApp::new();

    for path in ["/api/v1/tracking", "/api/v1/tracking?number="] {
        let (status, body) = lookup(&app, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("tracking number"));
    }
}

#[tokio::test]
async fn record_fields_match_the_documented_demo_data() {
    let app = TestApp::new();

    let (_, body) = lookup(&app, "/api/v1/tracking/SHP123456").await;
    let record = &body["data"];

    assert_eq!(record["status"], "In Transit");
    assert_eq!(record["origin"], "Los Angeles, CA");
    assert_eq!(record["destination"], "New York, NY");
    assert_eq!(record["current_location"], "New York, NY");
    assert_eq!(record["estimated_delivery"], "2024-01-15");
    assert_eq!(record["weight"], "15.5 kg");
}
