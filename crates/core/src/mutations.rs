// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity store operations and cross-entity lifecycle rules.
//!
//! This layer has no error channel: an unknown id makes the affected
//! operation (or the cross-entity side effect of an append) a silent
//! no-op. Input validation — capacity limits, availability checks,
//! license expiry — is the calling layer's responsibility; once a
//! lifecycle operation is invoked it transitions state unconditionally.
//!
//! Trips, maintenance logs, and fuel logs are append-only: no delete
//! operation exists for them.

use crate::state::FleetState;
use fleetflow_domain::{
    Driver, DriverStatus, FuelLog, MaintenanceLog, MaintenanceStatus, Trip, TripStatus, Vehicle,
    VehicleStatus,
};

impl FleetState {
    /// Appends a vehicle. A record whose id is already present is
    /// ignored, so duplicate ids can never create ambiguous lookups.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        if self.vehicle(&vehicle.id).is_some() {
            return;
        }
        self.vehicles.push(vehicle);
    }

    /// Replaces the vehicle with the same id. Unknown id: no-op.
    pub fn update_vehicle(&mut self, vehicle: Vehicle) {
        if let Some(existing) = self.vehicles.iter_mut().find(|v| v.id == vehicle.id) {
            *existing = vehicle;
        }
    }

    /// Removes a vehicle. Trips and logs referencing it are left in
    /// place; their lookups degrade to "Unknown".
    pub fn delete_vehicle(&mut self, id: &str) {
        self.vehicles.retain(|v| v.id != id);
    }

    /// Targeted status-only patch, used by the lifecycle rules and by
    /// manual admin override. Unknown id: no-op.
    pub fn set_vehicle_status(&mut self, id: &str, status: VehicleStatus) {
        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == id) {
            vehicle.status = status;
        }
    }

    /// Appends a driver. Duplicate id: no-op.
    pub fn add_driver(&mut self, driver: Driver) {
        if self.driver(&driver.id).is_some() {
            return;
        }
        self.drivers.push(driver);
    }

    /// Replaces the driver with the same id. Unknown id: no-op.
    pub fn update_driver(&mut self, driver: Driver) {
        if let Some(existing) = self.drivers.iter_mut().find(|d| d.id == driver.id) {
            *existing = driver;
        }
    }

    /// Removes a driver. Trips referencing it are left dangling.
    pub fn delete_driver(&mut self, id: &str) {
        self.drivers.retain(|d| d.id != id);
    }

    /// Appends a trip. Duplicate id: no-op.
    pub fn create_trip(&mut self, trip: Trip) {
        if self.trip(&trip.id).is_some() {
            return;
        }
        self.trips.push(trip);
    }

    /// Dispatches a trip: trip goes Dispatched, and its vehicle and
    /// driver both go On Trip.
    ///
    /// Preconditions (vehicle Available, driver On/Off Duty with a valid
    /// license) are the caller's to check before invoking; the rule
    /// itself performs the transition unconditionally. Unknown trip id:
    /// no-op. Dangling vehicle/driver references skip that side effect.
    pub fn start_trip(&mut self, trip_id: &str) {
        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            return;
        };
        trip.status = TripStatus::Dispatched;
        let vehicle_id = trip.vehicle_id.clone();
        let driver_id = trip.driver_id.clone();

        self.set_vehicle_status(&vehicle_id, VehicleStatus::OnTrip);
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.id == driver_id) {
            driver.status = DriverStatus::OnTrip;
        }
    }

    /// Completes a trip: trip goes Completed with `completed_at` set,
    /// the vehicle returns to Available with its odometer advanced to
    /// `max(current, final_odometer)`, and the driver returns to On
    /// Duty with its completed-trip counter incremented.
    ///
    /// Unknown trip id: no-op. Dangling references skip that side
    /// effect.
    pub fn complete_trip(&mut self, trip_id: &str, final_odometer: u64, completed_at: &str) {
        let Some(trip) = self.trips.iter_mut().find(|t| t.id == trip_id) else {
            return;
        };
        trip.status = TripStatus::Completed;
        trip.completed_at = Some(completed_at.to_string());
        let vehicle_id = trip.vehicle_id.clone();
        let driver_id = trip.driver_id.clone();

        if let Some(vehicle) = self.vehicles.iter_mut().find(|v| v.id == vehicle_id) {
            vehicle.status = VehicleStatus::Available;
            // Odometer is monotonic: a stale reading never lowers it.
            vehicle.odometer = vehicle.odometer.max(final_odometer);
        }
        if let Some(driver) = self.drivers.iter_mut().find(|d| d.id == driver_id) {
            driver.status = DriverStatus::OnDuty;
            driver.trips_completed += 1;
        }
    }

    /// Appends a maintenance log and forces the referenced vehicle to
    /// In Shop, whatever its prior status.
    ///
    /// Duplicate log id: no-op. A dangling vehicle reference skips the
    /// status force; the append still succeeds.
    pub fn add_maintenance_log(&mut self, log: MaintenanceLog) {
        if self.maintenance_log(&log.id).is_some() {
            return;
        }
        let vehicle_id = log.vehicle_id.clone();
        self.maintenance_logs.push(log);
        self.set_vehicle_status(&vehicle_id, VehicleStatus::InShop);
    }

    /// Marks a maintenance log Completed and forces the referenced
    /// vehicle back to Available, without checking for other open logs.
    ///
    /// Idempotent: a second call re-sets the same values. Unknown log
    /// id: no-op.
    pub fn complete_maintenance_log(&mut self, log_id: &str) {
        let Some(log) = self.maintenance_logs.iter_mut().find(|m| m.id == log_id) else {
            return;
        };
        log.status = MaintenanceStatus::Completed;
        let vehicle_id = log.vehicle_id.clone();
        self.set_vehicle_status(&vehicle_id, VehicleStatus::Available);
    }

    /// Appends a fuel log and forces the referenced vehicle to
    /// Available.
    ///
    /// Fuel logging is modeled as ending a shop or trip visit, not as a
    /// neutral event; the force is applied without inspecting the
    /// vehicle's current status. Duplicate log id: no-op.
    pub fn add_fuel_log(&mut self, log: FuelLog) {
        if self.fuel_log(&log.id).is_some() {
            return;
        }
        let vehicle_id = log.vehicle_id.clone();
        self.fuel_logs.push(log);
        self.set_vehicle_status(&vehicle_id, VehicleStatus::Available);
    }
}
