// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow_domain::{Driver, FuelLog, MaintenanceLog, Trip, Vehicle};

/// The in-memory source of truth for the fleet.
///
/// Owns the five collections; every read and write passes through it.
/// The state is an explicitly constructed object handed to whichever
/// layer needs it — there are no module-level singletons. Execution is
/// single-threaded and synchronous: each mutation runs to completion
/// before the next begins.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FleetState {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub trips: Vec<Trip>,
    pub maintenance_logs: Vec<MaintenanceLog>,
    pub fuel_logs: Vec<FuelLog>,
}

impl FleetState {
    /// Creates an empty state, for degraded deployments with no seed
    /// dataset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            drivers: Vec::new(),
            trips: Vec::new(),
            maintenance_logs: Vec::new(),
            fuel_logs: Vec::new(),
        }
    }

    /// Creates a state populated with the built-in default dataset.
    #[must_use]
    pub fn seed() -> Self {
        crate::seed::seed_state()
    }

    /// Looks up a vehicle by id.
    #[must_use]
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Looks up a driver by id.
    #[must_use]
    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Looks up a trip by id.
    #[must_use]
    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    /// Looks up a maintenance log by id.
    #[must_use]
    pub fn maintenance_log(&self, id: &str) -> Option<&MaintenanceLog> {
        self.maintenance_logs.iter().find(|m| m.id == id)
    }

    /// Looks up a fuel log by id.
    #[must_use]
    pub fn fuel_log(&self, id: &str) -> Option<&FuelLog> {
        self.fuel_logs.iter().find(|f| f.id == id)
    }

    /// Display name for a vehicle reference, degrading to "Unknown" for
    /// dangling ids.
    #[must_use]
    pub fn vehicle_name(&self, id: &str) -> &str {
        self.vehicle(id).map_or("Unknown", |v| v.name.as_str())
    }

    /// Display name for a driver reference, degrading to "Unknown" for
    /// dangling ids.
    #[must_use]
    pub fn driver_name(&self, id: &str) -> &str {
        self.driver(id).map_or("Unknown", |d| d.name.as_str())
    }
}
