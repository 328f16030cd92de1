// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side fleet analytics.
//!
//! Everything here is computed, not stored: pure functions of the
//! current collections, recomputed on every call. No caching, no side
//! effects.

use crate::status::{DriverStatus, TripStatus, VehicleStatus, VehicleType};
use crate::types::{Driver, FuelLog, MaintenanceLog, Trip, Vehicle};

/// Simulated average payload revenue per km by vehicle type.
#[must_use]
pub const fn revenue_per_km(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Truck => 5.5,
        VehicleType::Van => 2.5,
        VehicleType::Bike => 1.0,
    }
}

/// Simulated acquisition cost by vehicle type.
#[must_use]
pub const fn acquisition_cost(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Truck => 80_000.0,
        VehicleType::Van => 35_000.0,
        VehicleType::Bike => 5_000.0,
    }
}

/// Fleet utilization as a whole percentage.
///
/// On Trip count over non-Retired count, rounded to the nearest percent.
/// Defined as 0 for an empty (or fully retired) fleet.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn utilization(vehicles: &[Vehicle]) -> u32 {
    let fleet = vehicles
        .iter()
        .filter(|v| v.status != VehicleStatus::Retired)
        .count();
    if fleet == 0 {
        return 0;
    }
    let on_trip = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::OnTrip)
        .count();
    ((on_trip as f64 / fleet as f64) * 100.0).round() as u32
}

/// Per-vehicle cost and performance figures.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleStats {
    /// Chart label: second word of the vehicle name, or the full name.
    pub label: String,
    /// Total fuel spend, rounded to whole currency units.
    pub fuel_cost: i64,
    /// Total maintenance spend, rounded to whole currency units.
    pub maintenance_cost: i64,
    /// km per liter over the vehicle's lifetime, one decimal. 0 when no
    /// fuel has been logged.
    pub fuel_efficiency: f64,
    /// Return on investment as a whole percentage.
    pub roi: i64,
}

/// Chart label for a vehicle: the model word of "Make Model" names.
#[must_use]
pub fn stats_label(name: &str) -> String {
    name.split_whitespace()
        .nth(1)
        .unwrap_or(name)
        .to_string()
}

/// Computes cost and performance figures for every non-retired vehicle.
///
/// ROI is `(odometer x revenue/km - (maintenance + fuel)) / acquisition
/// cost`, as a rounded percentage. Both lookup tables are keyed by
/// vehicle type.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn vehicle_stats(
    vehicles: &[Vehicle],
    fuel_logs: &[FuelLog],
    maintenance_logs: &[MaintenanceLog],
) -> Vec<VehicleStats> {
    vehicles
        .iter()
        .filter(|v| v.status != VehicleStatus::Retired)
        .map(|v| {
            let total_fuel_cost: f64 = fuel_logs
                .iter()
                .filter(|f| f.vehicle_id == v.id)
                .map(|f| f.cost)
                .sum();
            let total_liters: f64 = fuel_logs
                .iter()
                .filter(|f| f.vehicle_id == v.id)
                .map(|f| f.liters)
                .sum();
            let total_maintenance_cost: f64 = maintenance_logs
                .iter()
                .filter(|m| m.vehicle_id == v.id)
                .map(|m| m.cost)
                .sum();

            let odometer = v.odometer as f64;
            let fuel_efficiency = if total_liters > 0.0 {
                ((odometer / total_liters) * 10.0).round() / 10.0
            } else {
                0.0
            };

            let estimated_revenue = odometer * revenue_per_km(v.vehicle_type);
            let roi = ((estimated_revenue - (total_maintenance_cost + total_fuel_cost))
                / acquisition_cost(v.vehicle_type))
                * 100.0;

            VehicleStats {
                label: stats_label(&v.name),
                fuel_cost: total_fuel_cost.round() as i64,
                maintenance_cost: total_maintenance_cost.round() as i64,
                fuel_efficiency,
                roi: roi.round() as i64,
            }
        })
        .collect()
}

/// Fleet-wide ROI summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiOverview {
    /// Rounded mean ROI across the stats set; 0 for an empty set.
    pub average_roi: i64,
    /// Label of the highest-ROI vehicle; later entries win ties.
    pub top_performer: Option<String>,
}

/// Summarizes a stats set into average ROI and top performer.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn fleet_roi_overview(stats: &[VehicleStats]) -> RoiOverview {
    if stats.is_empty() {
        return RoiOverview {
            average_roi: 0,
            top_performer: None,
        };
    }
    let total: i64 = stats.iter().map(|s| s.roi).sum();
    let average_roi = (total as f64 / stats.len() as f64).round() as i64;
    let top_performer = stats
        .iter()
        .reduce(|best, s| if best.roi > s.roi { best } else { s })
        .map(|s| s.label.clone());
    RoiOverview {
        average_roi,
        top_performer,
    }
}

/// One labeled bucket of a categorical breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSlice {
    pub label: &'static str,
    pub count: usize,
}

/// Vehicle counts by status, in fixed category order.
///
/// The In Shop bucket carries the "Maintenance (In Shop)" display label.
/// Empty buckets are kept so legends stay stable.
#[must_use]
pub fn vehicle_status_distribution(vehicles: &[Vehicle]) -> Vec<StatusSlice> {
    let count = |status: VehicleStatus| {
        vehicles.iter().filter(|v| v.status == status).count()
    };
    vec![
        StatusSlice {
            label: "Available",
            count: count(VehicleStatus::Available),
        },
        StatusSlice {
            label: "On Trip",
            count: count(VehicleStatus::OnTrip),
        },
        StatusSlice {
            label: "Maintenance (In Shop)",
            count: count(VehicleStatus::InShop),
        },
        StatusSlice {
            label: "Retired",
            count: count(VehicleStatus::Retired),
        },
    ]
}

/// Trip counts by status, in fixed category order.
///
/// Dispatched trips are labeled "Active".
#[must_use]
pub fn trip_status_breakdown(trips: &[Trip]) -> Vec<StatusSlice> {
    let count = |status: TripStatus| trips.iter().filter(|t| t.status == status).count();
    vec![
        StatusSlice {
            label: "Completed",
            count: count(TripStatus::Completed),
        },
        StatusSlice {
            label: "Active",
            count: count(TripStatus::Dispatched),
        },
        StatusSlice {
            label: "Draft",
            count: count(TripStatus::Draft),
        },
        StatusSlice {
            label: "Cancelled",
            count: count(TripStatus::Cancelled),
        },
    ]
}

/// Command-center headline figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetKpis {
    /// Vehicles currently On Trip.
    pub active_fleet: usize,
    /// Vehicles currently In Shop.
    pub in_shop: usize,
    /// Vehicles currently Available.
    pub available: usize,
    /// Fleet utilization percentage.
    pub utilization: u32,
    /// Draft trips awaiting assignment.
    pub pending_trips: usize,
    /// Drivers On Duty or On Trip.
    pub active_drivers: usize,
}

/// Computes the command-center headline figures.
#[must_use]
pub fn fleet_kpis(vehicles: &[Vehicle], drivers: &[Driver], trips: &[Trip]) -> FleetKpis {
    FleetKpis {
        active_fleet: vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::OnTrip)
            .count(),
        in_shop: vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::InShop)
            .count(),
        available: vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Available)
            .count(),
        utilization: utilization(vehicles),
        pending_trips: trips
            .iter()
            .filter(|t| t.status == TripStatus::Draft)
            .count(),
        active_drivers: drivers
            .iter()
            .filter(|d| matches!(d.status, DriverStatus::OnDuty | DriverStatus::OnTrip))
            .count(),
    }
}

/// Fleet-wide fuel spend.
#[must_use]
pub fn total_fuel_cost(fuel_logs: &[FuelLog]) -> f64 {
    fuel_logs.iter().map(|f| f.cost).sum()
}

/// Fleet-wide maintenance spend.
#[must_use]
pub fn total_maintenance_cost(maintenance_logs: &[MaintenanceLog]) -> f64 {
    maintenance_logs.iter().map(|m| m.cost).sum()
}

/// The most recently created trips, newest first.
///
/// ISO 8601 timestamps sort chronologically, so ordering compares the
/// stored strings directly.
#[must_use]
pub fn recent_trips(trips: &[Trip], limit: usize) -> Vec<&Trip> {
    let mut sorted: Vec<&Trip> = trips.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
