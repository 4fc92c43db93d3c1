//! ShipCo API Library
//!
//! This crate provides the backend for the ShipCo logistics demo site:
//! the public tracking lookup, the demo admin login, and the in-memory
//! shipment registry.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod openapi;
pub mod services;

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use utoipa::ToSchema;

use auth::AuthService;
use services::{shipments::ShipmentService, tracking::TrackingService};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub tracking: Arc<TrackingService>,
    pub shipments: ShipmentService,
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Builds the state with the demo tracking directory and registry seed.
    pub fn new(config: config::AppConfig) -> Self {
        let auth = Arc::new(AuthService::new(auth::AuthConfig::new(
            config.jwt_secret.clone(),
            Duration::from_secs(config.jwt_expiration_secs),
            Duration::from_millis(config.login_delay_ms),
        )));

        Self {
            tracking: Arc::new(TrackingService::with_demo_shipments()),
            shipments: ShipmentService::with_demo_shipments(),
            auth,
            config,
        }
    }
}

// Common response wrappers
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseMeta {
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}

/// Standard API result type for JSON responses
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, errors::ServiceError>;

// Service banner; the demo pointers double as the in-UI documentation the
// original site showed on its tracking and login pages.
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "shipco-api",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "demo_tracking_numbers": ["SHP123456", "SHP789012"],
        "demo_credentials": [
            "admin@shipco.com / admin123",
            "demo@shipco.com / demo123"
        ],
        "docs": "/swagger-ui"
    }))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::liveness_check))
        .route("/ready", get(handlers::health::readiness_check))
}

/// Authentication routes: login is public, the rest require a session.
pub fn auth_routes(auth: Arc<AuthService>) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(handlers::auth::logout))
        .route("/me", get(handlers::auth::me))
        .route_layer(middleware::from_fn_with_state(auth, auth::require_session));

    Router::new()
        .route("/login", post(handlers::auth::login))
        .merge(protected)
}

/// Versioned API routes: the public tracking lookup plus the
/// session-guarded admin registry.
pub fn api_v1_routes(auth: Arc<AuthService>) -> Router<AppState> {
    let tracking = Router::new()
        .route("/tracking", get(handlers::tracking::lookup))
        .route(
            "/tracking/:tracking_number",
            get(handlers::tracking::lookup_by_number),
        );

    let admin = Router::new()
        .route(
            "/admin/shipments",
            get(handlers::shipments::list_shipments).post(handlers::shipments::create_shipment),
        )
        .route(
            "/admin/shipments/stats",
            get(handlers::shipments::shipment_stats),
        )
        .route(
            "/admin/shipments/:id",
            axum::routing::put(handlers::shipments::update_shipment)
                .delete(handlers::shipments::delete_shipment),
        )
        .route_layer(middleware::from_fn_with_state(auth, auth::require_session));

    tracking.merge(admin)
}

/// Assembles the full application router. CORS is layered on by the binary,
/// which derives it from configuration.
pub fn app_router(state: AppState) -> Router {
    let auth_service = state.auth.clone();

    Router::new()
        .route("/", get(root))
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(auth_service.clone()))
        .nest("/api/v1", api_v1_routes(auth_service))
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
        .with_state(state)
}
