#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use shipco_api::{config::AppConfig, AppState};

/// Helper harness wrapping the real application router. All state is
/// in-memory, so a fresh `TestApp` is a fresh world.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let state = AppState::new(test_config());
        Self {
            router: shipco_api::app_router(state),
        }
    }

    /// Sends a request through the router. `token`, when given, is sent as
    /// a bearer credential.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request builds");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router never errors")
    }

    /// Logs in with the given pair and returns the raw response.
    pub async fn login(&self, email: &str, password: &str) -> Response<Body> {
        self.request(
            Method::POST,
            "/auth/login",
            Some(json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Logs in with the primary demo credentials and returns the token.
    pub async fn admin_token(&self) -> String {
        let response = self.login("admin@shipco.com", "admin123").await;
        assert_eq!(response.status(), StatusCode::OK, "demo login must succeed");
        let body = read_json(response).await;
        body["access_token"]
            .as_str()
            .expect("token present")
            .to_string()
    }
}

/// Consumes a response body and parses it as JSON.
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 18_080,
        environment: "test".to_string(),
        log_level: "info".to_string(),
        log_json: false,
        jwt_secret: "test_secret_key_for_testing_purposes_only_32chars".to_string(),
        jwt_expiration_secs: 3600,
        // Keep the simulated gateway latency out of the test suite.
        login_delay_ms: 0,
        cors_allowed_origins: None,
        cors_allow_any_origin: false,
    }
}
