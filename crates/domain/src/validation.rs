// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dispatch-eligibility rules.
//!
//! These predicates are read-only and enforce nothing by themselves.
//! The lifecycle operations in the core crate transition state
//! unconditionally once invoked; callers are expected to run these
//! checks first (the api crate composes them into a single
//! pre-dispatch validation).

use crate::compliance::parse_wire_date;
use crate::status::{DriverStatus, VehicleStatus, VehicleType};
use crate::types::{Driver, Vehicle};
use time::Date;

/// Returns true if the vehicle may be committed to a new trip.
///
/// Vehicle status is authoritative: only `Available` qualifies. In Shop,
/// On Trip, and Retired vehicles are all ineligible.
#[must_use]
pub fn vehicle_dispatch_eligible(vehicle: &Vehicle) -> bool {
    vehicle.status == VehicleStatus::Available
}

/// Returns true if the driver may be committed to a new trip.
///
/// Requires On Duty or Off Duty status and a license expiry on or after
/// `today`. An unparseable expiry date fails the check.
#[must_use]
pub fn driver_dispatch_eligible(driver: &Driver, today: Date) -> bool {
    matches!(driver.status, DriverStatus::OnDuty | DriverStatus::OffDuty)
        && parse_wire_date(&driver.license_expiry).is_ok_and(|d| d >= today)
}

/// Returns true if the driver's license categories cover the vehicle type.
#[must_use]
pub fn license_covers(driver: &Driver, vehicle_type: VehicleType) -> bool {
    driver.license_categories.contains(&vehicle_type)
}

/// Returns true if the cargo weight fits the vehicle's capacity.
#[must_use]
pub fn cargo_within_capacity(cargo_weight: f64, vehicle: &Vehicle) -> bool {
    cargo_weight >= 0.0 && cargo_weight <= vehicle.max_capacity
}
