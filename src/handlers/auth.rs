use crate::{
    auth::AuthSession,
    errors::ServiceError,
    handlers::common::{no_content_response, success_response, validate_input},
    AppState,
};
use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "email": "admin@shipco.com",
    "password": "admin123"
}))]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    #[schema(example = "admin@shipco.com")]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token response
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Current session identity
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    #[schema(example = "admin@shipco.com")]
    pub email: String,
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = TokenResponse),
        (status = 400, description = "Missing email or password", body = crate::errors::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    validate_input(&payload)?;

    let token = state.auth.login(&payload.email, &payload.password).await?;

    Ok(success_response(TokenResponse {
        access_token: token.access_token,
        token_type: "bearer".to_string(),
        expires_in: token.expires_in,
    }))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 204, description = "Session revoked"),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
) -> Result<impl IntoResponse, ServiceError> {
    state.auth.revoke(&session.token_id);
    Ok(no_content_response())
}

#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "auth"
)]
pub async fn me(
    Extension(session): Extension<AuthSession>,
) -> Result<impl IntoResponse, ServiceError> {
    Ok(success_response(SessionResponse {
        email: session.email,
    }))
}
