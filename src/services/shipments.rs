use crate::models::shipment::{ShipmentStatus, ShipmentSummary};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

/// Input for creating a registry shipment. Field validation happens at the
/// HTTP boundary; by the time this reaches the service the strings are
/// non-empty and the date has parsed.
#[derive(Debug, Clone)]
pub struct NewShipment {
    pub origin: String,
    pub destination: String,
    pub estimated_delivery: NaiveDate,
}

/// Aggregate counts derived from the live collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegistryStats {
    pub total: usize,
    pub in_transit: usize,
    pub delivered: usize,
    /// Shipments still in the initial `Created` state
    pub pending: usize,
}

/// In-memory registry of shipment summaries managed through the admin area.
///
/// State lives for the lifetime of the process; there is no persistence.
/// Updates and deletes against an unknown id leave the collection untouched
/// and raise no error.
#[derive(Clone)]
pub struct ShipmentService {
    shipments: Arc<RwLock<Vec<ShipmentSummary>>>,
}

impl ShipmentService {
    pub fn new() -> Self {
        Self {
            shipments: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Seeds the registry with the two demo rows shown on first login.
    pub fn with_demo_shipments() -> Self {
        Self {
            shipments: Arc::new(RwLock::new(demo_shipments())),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_shipment(&self, input: NewShipment) -> ShipmentSummary {
        let shipment = ShipmentSummary {
            id: Uuid::new_v4(),
            tracking_number: generate_tracking_number(),
            status: ShipmentStatus::Created,
            current_location: input.origin.clone(),
            origin: input.origin,
            destination: input.destination,
            created_at: Utc::now(),
            estimated_delivery: input.estimated_delivery,
        };

        let mut shipments = self.shipments.write().await;
        shipments.push(shipment.clone());
        info!(
            shipment_id = %shipment.id,
            tracking_number = %shipment.tracking_number,
            "shipment created"
        );
        shipment
    }

    /// Replaces the current location and status of the matching shipment.
    /// Any status is accepted regardless of the current one. Returns the
    /// updated row, or `None` when no row matched (the collection is
    /// unchanged in that case).
    #[instrument(skip(self))]
    pub async fn update_location_status(
        &self,
        id: Uuid,
        location: String,
        status: ShipmentStatus,
    ) -> Option<ShipmentSummary> {
        let mut shipments = self.shipments.write().await;
        let shipment = shipments.iter_mut().find(|s| s.id == id)?;
        shipment.current_location = location;
        shipment.status = status;
        info!(shipment_id = %id, status = %status, "shipment updated");
        Some(shipment.clone())
    }

    /// Removes the matching shipment. Returns whether a row was removed;
    /// an unknown id removes nothing.
    #[instrument(skip(self))]
    pub async fn delete_shipment(&self, id: Uuid) -> bool {
        let mut shipments = self.shipments.write().await;
        let before = shipments.len();
        shipments.retain(|s| s.id != id);
        let removed = shipments.len() < before;
        if removed {
            info!(shipment_id = %id, "shipment deleted");
        }
        removed
    }

    pub async fn get_shipment(&self, id: Uuid) -> Option<ShipmentSummary> {
        let shipments = self.shipments.read().await;
        shipments.iter().find(|s| s.id == id).cloned()
    }

    /// Returns the full collection. The registry is demo-scale; there is
    /// no pagination.
    pub async fn list_shipments(&self) -> Vec<ShipmentSummary> {
        self.shipments.read().await.clone()
    }

    /// Recomputes aggregate counts from the live collection.
    pub async fn stats(&self) -> RegistryStats {
        let shipments = self.shipments.read().await;
        RegistryStats {
            total: shipments.len(),
            in_transit: count_status(&shipments, ShipmentStatus::InTransit),
            delivered: count_status(&shipments, ShipmentStatus::Delivered),
            pending: count_status(&shipments, ShipmentStatus::Created),
        }
    }
}

impl Default for ShipmentService {
    fn default() -> Self {
        Self::new()
    }
}

fn count_status(shipments: &[ShipmentSummary], status: ShipmentStatus) -> usize {
    shipments.iter().filter(|s| s.status == status).count()
}

/// Generated numbers follow the public `SHP` + 6 digits format but are not
/// guaranteed unique, matching the original registry.
fn generate_tracking_number() -> String {
    let mut rng = rand::thread_rng();
    format!("SHP{:06}", rng.gen_range(0..1_000_000))
}

fn seed_timestamp(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid demo date")
        .and_utc()
}

fn demo_shipments() -> Vec<ShipmentSummary> {
    vec![
        ShipmentSummary {
            id: Uuid::new_v4(),
            tracking_number: "SHP123456".to_string(),
            status: ShipmentStatus::InTransit,
            origin: "Los Angeles, CA".to_string(),
            destination: "New York, NY".to_string(),
            current_location: "Chicago, IL".to_string(),
            created_at: seed_timestamp(2024, 1, 8),
            estimated_delivery: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid demo date"),
        },
        ShipmentSummary {
            id: Uuid::new_v4(),
            tracking_number: "SHP789012".to_string(),
            status: ShipmentStatus::Delivered,
            origin: "San Francisco, CA".to_string(),
            destination: "Seattle, WA".to_string(),
            current_location: "Seattle, WA".to_string(),
            created_at: seed_timestamp(2024, 1, 5),
            estimated_delivery: NaiveDate::from_ymd_opt(2024, 1, 12).expect("valid demo date"),
        },
    ]
}
