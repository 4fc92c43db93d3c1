use crate::{models::shipment::ShipmentRecord, ApiResponse, ApiResult, AppState};
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrackingQuery {
    /// Tracking number as typed into the lookup form
    pub number: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/tracking/{tracking_number}",
    params(
        ("tracking_number" = String, Path, description = "Tracking number, case-insensitive")
    ),
    responses(
        (status = 200, description = "Shipment found", body = ApiResponse<ShipmentRecord>),
        (status = 404, description = "Unknown tracking number", body = crate::errors::ErrorResponse)
    ),
    tag = "tracking"
)]
pub async fn lookup_by_number(
    State(state): State<AppState>,
    Path(tracking_number): Path<String>,
) -> ApiResult<ShipmentRecord> {
    let record = state.tracking.lookup(&tracking_number)?;
    Ok(Json(ApiResponse::success(record)))
}

/// Form-submission variant: the number arrives as a query parameter and may
/// be absent or empty, which fails before any lookup happens.
#[utoipa::path(
    get,
    path = "/api/v1/tracking",
    params(TrackingQuery),
    responses(
        (status = 200, description = "Shipment found", body = ApiResponse<ShipmentRecord>),
        (status = 400, description = "Missing tracking number", body = crate::errors::ErrorResponse),
        (status = 404, description = "Unknown tracking number", body = crate::errors::ErrorResponse)
    ),
    tag = "tracking"
)]
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<TrackingQuery>,
) -> ApiResult<ShipmentRecord> {
    let number = query.number.unwrap_or_default();
    let record = state.tracking.lookup(&number)?;
    Ok(Json(ApiResponse::success(record)))
}
