use crate::{
    errors::ServiceError,
    handlers::common::{created_response, no_content_response, validate_input},
    models::shipment::{ShipmentStatus, ShipmentSummary},
    services::shipments::{NewShipment, RegistryStats},
    ApiResponse, ApiResult, AppState,
};
use axum::{
    extract::{Path, State},
    response::{Json, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "origin": "Los Angeles, CA",
    "destination": "New York, NY",
    "estimated_delivery": "2024-01-15"
}))]
pub struct CreateShipmentRequest {
    /// Origin place name; becomes the initial current location
    #[validate(length(min = 1))]
    #[schema(example = "Los Angeles, CA")]
    pub origin: String,
    /// Destination place name
    #[validate(length(min = 1))]
    #[schema(example = "New York, NY")]
    pub destination: String,
    /// Estimated delivery date
    pub estimated_delivery: NaiveDate,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "current_location": "Denver, CO",
    "status": "In Transit"
}))]
pub struct UpdateShipmentRequest {
    /// New current location
    #[validate(length(min = 1))]
    #[schema(example = "Denver, CO")]
    pub current_location: String,
    /// New status; any member is accepted regardless of the current status
    pub status: ShipmentStatus,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/shipments",
    responses(
        (status = 200, description = "Shipments listed", body = ApiResponse<Vec<ShipmentSummary>>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "admin"
)]
pub async fn list_shipments(State(state): State<AppState>) -> ApiResult<Vec<ShipmentSummary>> {
    let shipments = state.shipments.list_shipments().await;
    Ok(Json(ApiResponse::success(shipments)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/shipments",
    request_body = CreateShipmentRequest,
    responses(
        (status = 201, description = "Shipment created", body = ApiResponse<ShipmentSummary>),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "admin"
)]
pub async fn create_shipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateShipmentRequest>,
) -> Result<Response, ServiceError> {
    validate_input(&payload)?;

    let created = state
        .shipments
        .create_shipment(NewShipment {
            origin: payload.origin,
            destination: payload.destination,
            estimated_delivery: payload.estimated_delivery,
        })
        .await;

    Ok(created_response(ApiResponse::success(created)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/shipments/{id}",
    params(
        ("id" = Uuid, Path, description = "Shipment ID")
    ),
    request_body = UpdateShipmentRequest,
    responses(
        (status = 200, description = "Shipment updated", body = ApiResponse<ShipmentSummary>),
        (status = 404, description = "Shipment not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "admin"
)]
pub async fn update_shipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateShipmentRequest>,
) -> ApiResult<ShipmentSummary> {
    validate_input(&payload)?;

    match state
        .shipments
        .update_location_status(id, payload.current_location, payload.status)
        .await
    {
        Some(updated) => Ok(Json(ApiResponse::success(updated))),
        None => Err(ServiceError::NotFound(format!("Shipment {} not found", id))),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/shipments/{id}",
    params(
        ("id" = Uuid, Path, description = "Shipment ID")
    ),
    responses(
        (status = 204, description = "Shipment deleted"),
        (status = 404, description = "Shipment not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "admin"
)]
pub async fn delete_shipment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ServiceError> {
    if state.shipments.delete_shipment(id).await {
        Ok(no_content_response())
    } else {
        Err(ServiceError::NotFound(format!("Shipment {} not found", id)))
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/shipments/stats",
    responses(
        (status = 200, description = "Aggregate counts", body = ApiResponse<RegistryStats>),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "admin"
)]
pub async fn shipment_stats(State(state): State<AppState>) -> ApiResult<RegistryStats> {
    let stats = state.shipments.stats().await;
    Ok(Json(ApiResponse::success(stats)))
}
