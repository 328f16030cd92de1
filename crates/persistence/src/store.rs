// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow::FleetState;
use fleetflow_domain::{Driver, FuelLog, MaintenanceLog, Trip, Vehicle, VehicleStatus};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::keys::Collection;

/// Store adapter binding a [`FleetState`] to a storage backend.
///
/// Init is load-or-seed: each collection key is read once; a present,
/// well-formed value wins, anything else falls back to the default
/// dataset. Every mutation delegates to the in-memory state and then
/// writes back the full touched collections under their keys. Reads
/// never touch the backend.
pub struct FleetStore<B> {
    backend: B,
    state: FleetState,
}

impl<B: StorageBackend> FleetStore<B> {
    /// Opens a store, falling back to the built-in seed dataset for any
    /// collection that is absent or malformed.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend read fails. Malformed stored values
    /// are not errors; they are logged and replaced by the fallback.
    pub fn open(backend: B) -> Result<Self, PersistenceError> {
        Self::open_with_fallback(backend, FleetState::seed())
    }

    /// Opens a store with empty collections as the fallback, for
    /// degraded deployments that should not invent data.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend read fails.
    pub fn open_empty(backend: B) -> Result<Self, PersistenceError> {
        Self::open_with_fallback(backend, FleetState::new())
    }

    fn open_with_fallback(backend: B, fallback: FleetState) -> Result<Self, PersistenceError> {
        let state = FleetState {
            vehicles: load_collection(&backend, Collection::Vehicles, fallback.vehicles)?,
            drivers: load_collection(&backend, Collection::Drivers, fallback.drivers)?,
            trips: load_collection(&backend, Collection::Trips, fallback.trips)?,
            maintenance_logs: load_collection(
                &backend,
                Collection::MaintenanceLogs,
                fallback.maintenance_logs,
            )?,
            fuel_logs: load_collection(&backend, Collection::FuelLogs, fallback.fuel_logs)?,
        };
        Ok(Self { backend, state })
    }

    /// The current in-memory state.
    #[must_use]
    pub const fn state(&self) -> &FleetState {
        &self.state
    }

    /// Mutable access to the underlying backend, for the session and
    /// account keys that live alongside the collections.
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the store, returning its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Re-serializes and writes back every collection.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend write fails.
    pub fn flush(&mut self) -> Result<(), PersistenceError> {
        self.save(&Collection::ALL)
    }

    /// Appends a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), PersistenceError> {
        self.state.add_vehicle(vehicle);
        self.save(&[Collection::Vehicles])
    }

    /// Replaces the vehicle with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn update_vehicle(&mut self, vehicle: Vehicle) -> Result<(), PersistenceError> {
        self.state.update_vehicle(vehicle);
        self.save(&[Collection::Vehicles])
    }

    /// Removes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn delete_vehicle(&mut self, id: &str) -> Result<(), PersistenceError> {
        self.state.delete_vehicle(id);
        self.save(&[Collection::Vehicles])
    }

    /// Targeted vehicle status patch.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn set_vehicle_status(
        &mut self,
        id: &str,
        status: VehicleStatus,
    ) -> Result<(), PersistenceError> {
        self.state.set_vehicle_status(id, status);
        self.save(&[Collection::Vehicles])
    }

    /// Appends a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_driver(&mut self, driver: Driver) -> Result<(), PersistenceError> {
        self.state.add_driver(driver);
        self.save(&[Collection::Drivers])
    }

    /// Replaces the driver with the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn update_driver(&mut self, driver: Driver) -> Result<(), PersistenceError> {
        self.state.update_driver(driver);
        self.save(&[Collection::Drivers])
    }

    /// Removes a driver.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn delete_driver(&mut self, id: &str) -> Result<(), PersistenceError> {
        self.state.delete_driver(id);
        self.save(&[Collection::Drivers])
    }

    /// Appends a trip.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn create_trip(&mut self, trip: Trip) -> Result<(), PersistenceError> {
        self.state.create_trip(trip);
        self.save(&[Collection::Trips])
    }

    /// Dispatches a trip; the trip, vehicle, and driver collections are
    /// all written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn start_trip(&mut self, trip_id: &str) -> Result<(), PersistenceError> {
        self.state.start_trip(trip_id);
        self.save(&[Collection::Trips, Collection::Vehicles, Collection::Drivers])
    }

    /// Completes a trip; the trip, vehicle, and driver collections are
    /// all written back.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn complete_trip(
        &mut self,
        trip_id: &str,
        final_odometer: u64,
        completed_at: &str,
    ) -> Result<(), PersistenceError> {
        self.state.complete_trip(trip_id, final_odometer, completed_at);
        self.save(&[Collection::Trips, Collection::Vehicles, Collection::Drivers])
    }

    /// Appends a maintenance log; the referenced vehicle goes In Shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_maintenance_log(&mut self, log: MaintenanceLog) -> Result<(), PersistenceError> {
        self.state.add_maintenance_log(log);
        self.save(&[Collection::MaintenanceLogs, Collection::Vehicles])
    }

    /// Completes a maintenance log; the referenced vehicle goes
    /// Available.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn complete_maintenance_log(&mut self, log_id: &str) -> Result<(), PersistenceError> {
        self.state.complete_maintenance_log(log_id);
        self.save(&[Collection::MaintenanceLogs, Collection::Vehicles])
    }

    /// Appends a fuel log; the referenced vehicle goes Available.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-through fails.
    pub fn add_fuel_log(&mut self, log: FuelLog) -> Result<(), PersistenceError> {
        self.state.add_fuel_log(log);
        self.save(&[Collection::FuelLogs, Collection::Vehicles])
    }

    fn save(&mut self, collections: &[Collection]) -> Result<(), PersistenceError> {
        for collection in collections {
            match collection {
                Collection::Vehicles => {
                    save_collection(&mut self.backend, *collection, &self.state.vehicles)?;
                }
                Collection::Drivers => {
                    save_collection(&mut self.backend, *collection, &self.state.drivers)?;
                }
                Collection::Trips => {
                    save_collection(&mut self.backend, *collection, &self.state.trips)?;
                }
                Collection::MaintenanceLogs => {
                    save_collection(&mut self.backend, *collection, &self.state.maintenance_logs)?;
                }
                Collection::FuelLogs => {
                    save_collection(&mut self.backend, *collection, &self.state.fuel_logs)?;
                }
            }
        }
        Ok(())
    }
}

/// Reads one collection, falling back on absence or corruption.
fn load_collection<B: StorageBackend, T: DeserializeOwned>(
    backend: &B,
    collection: Collection,
    fallback: Vec<T>,
) -> Result<Vec<T>, PersistenceError> {
    let key = collection.key();
    match backend.get(key)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!(key, error = %e, "Discarding malformed stored collection");
                Ok(fallback)
            }
        },
        None => Ok(fallback),
    }
}

/// Serializes one full collection and writes it back under its key.
fn save_collection<B: StorageBackend, T: Serialize>(
    backend: &mut B,
    collection: Collection,
    records: &[T],
) -> Result<(), PersistenceError> {
    let key = collection.key();
    let raw = serde_json::to_string(records)?;
    backend.put(key, &raw)?;
    debug!(key, records = records.len(), "Persisted collection");
    Ok(())
}
