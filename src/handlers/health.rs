use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;
use std::sync::OnceLock;
use std::time::Instant;

use crate::AppState;

/// Tracks application start time for uptime calculation
static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Initialize the start time (call this on application startup)
pub fn init_start_time() {
    let _ = START_TIME.get_or_init(Instant::now);
}

fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

#[derive(Debug, Serialize)]
pub struct ReadinessDetails {
    pub tracking_directory_records: usize,
    pub registry_shipments: usize,
}

/// Basic liveness probe - just checks if the service is running
pub async fn liveness_check() -> impl IntoResponse {
    Json(json!({
        "status": "up",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": get_uptime_secs(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Readiness probe. Both stores are in-memory, so readiness reduces to the
/// directory having been seeded.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let details = ReadinessDetails {
        tracking_directory_records: state.tracking.len(),
        registry_shipments: state.shipments.list_shipments().await.len(),
    };

    let ready = !state.tracking.is_empty();
    Json(json!({
        "status": if ready { "up" } else { "down" },
        "details": details,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
