// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod analytics;
mod compliance;
mod error;
mod filters;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use analytics::{
    FleetKpis, RoiOverview, StatusSlice, VehicleStats, acquisition_cost, fleet_kpis,
    fleet_roi_overview, recent_trips, revenue_per_km, stats_label, total_fuel_cost,
    total_maintenance_cost, trip_status_breakdown, utilization, vehicle_stats,
    vehicle_status_distribution,
};
pub use compliance::{
    EXPIRY_WARNING_DAYS, LicenseAlerts, is_license_expired, is_license_expiring_soon,
    license_alerts, parse_wire_date,
};
pub use error::DomainError;
pub use filters::{search_vehicles, trips_with_status};
pub use status::{DriverStatus, MaintenanceStatus, TripStatus, VehicleStatus, VehicleType};
pub use types::{Driver, FuelLog, MaintenanceLog, Trip, Vehicle};
pub use validation::{
    cargo_within_capacity, driver_dispatch_eligible, license_covers, vehicle_dispatch_eligible,
};
