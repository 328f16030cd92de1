// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fleet entity records.
//!
//! Records serialize to the persisted JSON layout: camelCase field names
//! and human-readable status strings. Mutation is by full-record
//! replacement; no record carries interior mutability.
//!
//! Date and timestamp fields stay ISO 8601 strings at rest and are parsed
//! only at the point of comparison (see the `compliance` module).

use crate::status::{DriverStatus, MaintenanceStatus, TripStatus, VehicleStatus, VehicleType};
use serde::{Deserialize, Serialize};

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier. Uniqueness is enforced at the store boundary.
    pub id: String,
    /// Display name, e.g. "Mercedes Sprinter".
    pub name: String,
    /// Vehicle classification.
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub license_plate: String,
    /// Maximum cargo weight in kilograms. Positive.
    pub max_capacity: f64,
    /// Kilometers driven. Monotonic: trip completion never lowers it.
    pub odometer: u64,
    pub status: VehicleStatus,
    pub region: String,
    /// ISO 8601 date of the most recent service.
    pub last_service: String,
}

/// A fleet driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique identifier. Uniqueness is enforced at the store boundary.
    pub id: String,
    pub name: String,
    /// ISO 8601 date the driving license expires.
    pub license_expiry: String,
    /// Vehicle types this driver is licensed for.
    pub license_categories: Vec<VehicleType>,
    pub status: DriverStatus,
    /// 0-100 metric. Display-only; no lifecycle rule consumes it.
    pub safety_score: u8,
    /// Lifetime completed-trip counter.
    pub trips_completed: u32,
    pub phone: String,
}

/// A cargo trip.
///
/// `vehicle_id` and `driver_id` are unchecked references; deleting the
/// referenced record leaves them dangling and lookups degrade to
/// "Unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    /// Cargo weight in kilograms. Non-negative.
    pub cargo_weight: f64,
    pub status: TripStatus,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 completion timestamp. Set exactly once, on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// A maintenance log entry for a vehicle. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceLog {
    pub id: String,
    pub vehicle_id: String,
    /// Kind of work, e.g. "Oil Change".
    #[serde(rename = "type")]
    pub maintenance_type: String,
    pub description: String,
    /// Cost in currency units. Non-negative.
    pub cost: f64,
    /// ISO 8601 date of the work.
    pub date: String,
    pub status: MaintenanceStatus,
}

/// A refueling log entry for a vehicle. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLog {
    pub id: String,
    pub vehicle_id: String,
    /// Liters dispensed. Non-negative.
    pub liters: f64,
    /// Cost in currency units. Non-negative.
    pub cost: f64,
    /// ISO 8601 date of the fill.
    pub date: String,
    /// Odometer reading at fill time, in kilometers.
    pub odometer: u64,
}
