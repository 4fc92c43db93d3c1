use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Shipment status enumeration
///
/// The update operation accepts any member regardless of the current
/// status; no transition rules are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ShipmentStatus {
    Created,
    #[serde(rename = "Picked Up")]
    PickedUp,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipmentStatus::Created => write!(f, "Created"),
            ShipmentStatus::PickedUp => write!(f, "Picked Up"),
            ShipmentStatus::InTransit => write!(f, "In Transit"),
            ShipmentStatus::OutForDelivery => write!(f, "Out for Delivery"),
            ShipmentStatus::Delivered => write!(f, "Delivered"),
        }
    }
}

impl FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let status = match value.to_ascii_lowercase().replace(['_', '-'], " ").as_str() {
            "created" => ShipmentStatus::Created,
            "picked up" | "pickedup" => ShipmentStatus::PickedUp,
            "in transit" | "intransit" => ShipmentStatus::InTransit,
            "out for delivery" | "outfordelivery" => ShipmentStatus::OutForDelivery,
            "delivered" => ShipmentStatus::Delivered,
            other => return Err(format!("Unknown shipment status '{}'", other)),
        };
        Ok(status)
    }
}

/// A single timestamped event in a shipment's history.
///
/// `status` is a free-text event label rather than a [`ShipmentStatus`]:
/// carrier feeds emit labels outside the coarse lifecycle set (for example
/// "Package Processed").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrackingUpdate {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub location: String,
    pub description: String,
}

impl TrackingUpdate {
    /// Combined date and time, used for newest-first ordering.
    pub fn occurred_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Full-detail shipment record held by the tracking directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShipmentRecord {
    /// Public tracking number, format `SHP` + 6 digits
    #[schema(example = "SHP123456")]
    pub tracking_number: String,
    pub status: ShipmentStatus,
    #[schema(example = "New York, NY")]
    pub current_location: String,
    #[schema(example = "Los Angeles, CA")]
    pub origin: String,
    #[schema(example = "New York, NY")]
    pub destination: String,
    pub estimated_delivery: NaiveDate,
    /// Free-text magnitude with the unit embedded, e.g. "15.5 kg"; never parsed
    #[schema(example = "15.5 kg")]
    pub weight: String,
    /// Event history, newest first; never empty for a record in the directory
    pub updates: Vec<TrackingUpdate>,
}

/// Summary row in the admin shipment registry.
///
/// The registry and the tracking directory are disjoint datasets: a
/// shipment created here is not visible to the public lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShipmentSummary {
    pub id: Uuid,
    #[schema(example = "SHP482913")]
    pub tracking_number: String,
    pub status: ShipmentStatus,
    #[schema(example = "Los Angeles, CA")]
    pub origin: String,
    #[schema(example = "New York, NY")]
    pub destination: String,
    #[schema(example = "Los Angeles, CA")]
    pub current_location: String,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: NaiveDate,
}
