use crate::{
    errors::ServiceError,
    models::shipment::{ShipmentRecord, ShipmentStatus, TrackingUpdate},
};
use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;
use tracing::instrument;

/// Read-only directory of shipment records keyed by tracking number.
///
/// The directory is built once at startup and never mutated. Lookup is an
/// exact-key probe after uppercasing; no partial, fuzzy, or prefix matching.
pub struct TrackingService {
    records: HashMap<String, ShipmentRecord>,
}

impl TrackingService {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.tracking_number.to_uppercase(), r))
            .collect();
        Self { records }
    }

    /// Builds the directory with the two demo shipments documented on the
    /// public tracking page.
    pub fn with_demo_shipments() -> Self {
        Self::new(demo_shipments())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a shipment by its tracking number.
    ///
    /// The input is uppercased before the probe, so `shp123456` finds
    /// `SHP123456`. Whitespace is not trimmed. A miss reports the string
    /// exactly as the caller typed it.
    #[instrument(skip(self))]
    pub fn lookup(&self, tracking_number: &str) -> Result<ShipmentRecord, ServiceError> {
        if tracking_number.is_empty() {
            return Err(ServiceError::ValidationError(
                "Please enter a tracking number".to_string(),
            ));
        }

        self.records
            .get(&tracking_number.to_uppercase())
            .cloned()
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No shipment found with tracking number: {}",
                    tracking_number
                ))
            })
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("valid demo time")
}

fn update(
    d: NaiveDate,
    t: NaiveTime,
    status: &str,
    location: &str,
    description: &str,
) -> TrackingUpdate {
    TrackingUpdate {
        date: d,
        time: t,
        status: status.to_string(),
        location: location.to_string(),
        description: description.to_string(),
    }
}

// History is stored newest-first. The SHP123456 record status lags its
// newest event on purpose: the demo data ships as-is.
fn demo_shipments() -> Vec<ShipmentRecord> {
    vec![
        ShipmentRecord {
            tracking_number: "SHP123456".to_string(),
            status: ShipmentStatus::InTransit,
            current_location: "New York, NY".to_string(),
            estimated_delivery: date(2024, 1, 15),
            origin: "Los Angeles, CA".to_string(),
            destination: "New York, NY".to_string(),
            weight: "15.5 kg".to_string(),
            updates: vec![
                update(
                    date(2024, 1, 10),
                    time(14, 30),
                    "Out for Delivery",
                    "New York, NY",
                    "Package is out for delivery",
                ),
                update(
                    date(2024, 1, 9),
                    time(8, 15),
                    "In Transit",
                    "Newark, NJ",
                    "Package in transit to destination",
                ),
                update(
                    date(2024, 1, 8),
                    time(22, 45),
                    "Package Processed",
                    "Chicago, IL",
                    "Package processed at facility",
                ),
                update(
                    date(2024, 1, 7),
                    time(10, 20),
                    "Picked Up",
                    "Los Angeles, CA",
                    "Package picked up from sender",
                ),
            ],
        },
        ShipmentRecord {
            tracking_number: "SHP789012".to_string(),
            status: ShipmentStatus::Delivered,
            current_location: "Miami, FL".to_string(),
            estimated_delivery: date(2024, 1, 12),
            origin: "Houston, TX".to_string(),
            destination: "Miami, FL".to_string(),
            weight: "8.2 kg".to_string(),
            updates: vec![
                update(
                    date(2024, 1, 12),
                    time(16, 45),
                    "Delivered",
                    "Miami, FL",
                    "Package delivered successfully",
                ),
                update(
                    date(2024, 1, 11),
                    time(9, 30),
                    "Out for Delivery",
                    "Miami, FL",
                    "Package out for delivery",
                ),
                update(
                    date(2024, 1, 10),
                    time(5, 0),
                    "In Transit",
                    "Jacksonville, FL",
                    "Package in transit",
                ),
                update(
                    date(2024, 1, 8),
                    time(14, 20),
                    "Picked Up",
                    "Houston, TX",
                    "Package picked up from sender",
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_input_fails_without_a_lookup() {
        let service = TrackingService::with_demo_shipments();
        assert_matches!(service.lookup(""), Err(ServiceError::ValidationError(_)));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let service = TrackingService::with_demo_shipments();
        let upper = service.lookup("SHP123456").unwrap();
        let lower = service.lookup("shp123456").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let service = TrackingService::with_demo_shipments();
        assert_matches!(service.lookup(" SHP123456"), Err(ServiceError::NotFound(_)));
    }

    #[test]
    fn miss_reports_the_input_as_typed() {
        let service = TrackingService::with_demo_shipments();
        let err = service.lookup("shp999999").unwrap_err();
        assert!(err.to_string().contains("shp999999"));
    }

    #[test]
    fn demo_histories_are_non_empty_and_newest_first() {
        let service = TrackingService::with_demo_shipments();
        for number in ["SHP123456", "SHP789012"] {
            let record = service.lookup(number).unwrap();
            assert!(!record.updates.is_empty());
            for pair in record.updates.windows(2) {
                assert!(pair[0].occurred_at() >= pair[1].occurred_at());
            }
        }
    }
}
