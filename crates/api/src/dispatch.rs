// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pre-dispatch validation.
//!
//! The core's `start_trip` transitions unconditionally once invoked;
//! this module is the check the calling layer runs first. It reads the
//! same state the core mutates, so a passing validation immediately
//! followed by the dispatch cannot race anything — execution is
//! single-threaded.

use thiserror::Error;
use time::Date;
use tracing::debug;

use fleetflow::FleetState;
use fleetflow_domain::{
    DriverStatus, TripStatus, VehicleStatus, VehicleType, cargo_within_capacity, license_covers,
    parse_wire_date, vehicle_dispatch_eligible,
};
use fleetflow_persistence::{FleetStore, PersistenceError, StorageBackend};

/// Reasons a trip cannot be dispatched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Trip '{0}' not found")]
    TripNotFound(String),

    #[error("Trip '{trip_id}' is {status}; only Draft trips can be dispatched")]
    TripNotDraft {
        trip_id: String,
        status: TripStatus,
    },

    #[error("Vehicle '{0}' not found")]
    VehicleNotFound(String),

    #[error("Vehicle '{vehicle_id}' is {status}; only Available vehicles can be dispatched")]
    VehicleUnavailable {
        vehicle_id: String,
        status: VehicleStatus,
    },

    #[error("Driver '{0}' not found")]
    DriverNotFound(String),

    #[error("Driver '{driver_id}' is {status} and cannot take a trip")]
    DriverUnavailable {
        driver_id: String,
        status: DriverStatus,
    },

    #[error("Driver '{driver_id}' license expired or invalid ('{license_expiry}')")]
    LicenseExpired {
        driver_id: String,
        license_expiry: String,
    },

    #[error("Driver '{driver_id}' is not licensed for {vehicle_type} vehicles")]
    LicenseCategoryNotCovered {
        driver_id: String,
        vehicle_type: VehicleType,
    },

    #[error("Cargo weight {cargo_weight} kg exceeds the vehicle's {max_capacity} kg capacity")]
    CargoOverweight {
        cargo_weight: f64,
        max_capacity: f64,
    },

    #[error("{0}")]
    Storage(#[from] PersistenceError),
}

/// Checks every dispatch precondition for a draft trip.
///
/// # Errors
///
/// Returns the first failing precondition, checked in order: trip
/// exists and is Draft, vehicle exists and is Available, driver exists
/// and is On/Off Duty with a valid unexpired license covering the
/// vehicle type, and the cargo fits the vehicle's capacity.
pub fn validate_dispatch(
    state: &FleetState,
    trip_id: &str,
    today: Date,
) -> Result<(), DispatchError> {
    let Some(trip) = state.trip(trip_id) else {
        return Err(DispatchError::TripNotFound(trip_id.to_string()));
    };
    if trip.status != TripStatus::Draft {
        return Err(DispatchError::TripNotDraft {
            trip_id: trip.id.clone(),
            status: trip.status,
        });
    }

    let Some(vehicle) = state.vehicle(&trip.vehicle_id) else {
        return Err(DispatchError::VehicleNotFound(trip.vehicle_id.clone()));
    };
    if !vehicle_dispatch_eligible(vehicle) {
        return Err(DispatchError::VehicleUnavailable {
            vehicle_id: vehicle.id.clone(),
            status: vehicle.status,
        });
    }

    let Some(driver) = state.driver(&trip.driver_id) else {
        return Err(DispatchError::DriverNotFound(trip.driver_id.clone()));
    };
    if !matches!(driver.status, DriverStatus::OnDuty | DriverStatus::OffDuty) {
        return Err(DispatchError::DriverUnavailable {
            driver_id: driver.id.clone(),
            status: driver.status,
        });
    }
    if !parse_wire_date(&driver.license_expiry).is_ok_and(|d| d >= today) {
        return Err(DispatchError::LicenseExpired {
            driver_id: driver.id.clone(),
            license_expiry: driver.license_expiry.clone(),
        });
    }
    if !license_covers(driver, vehicle.vehicle_type) {
        return Err(DispatchError::LicenseCategoryNotCovered {
            driver_id: driver.id.clone(),
            vehicle_type: vehicle.vehicle_type,
        });
    }

    if !cargo_within_capacity(trip.cargo_weight, vehicle) {
        return Err(DispatchError::CargoOverweight {
            cargo_weight: trip.cargo_weight,
            max_capacity: vehicle.max_capacity,
        });
    }

    Ok(())
}

/// Validates and dispatches a trip in one call.
///
/// # Errors
///
/// Returns a validation error without touching state, or a storage
/// error if the write-through fails after the transition.
pub fn dispatch_trip<B: StorageBackend>(
    store: &mut FleetStore<B>,
    trip_id: &str,
    today: Date,
) -> Result<(), DispatchError> {
    validate_dispatch(store.state(), trip_id, today)?;
    store.start_trip(trip_id)?;
    debug!(trip_id, "Trip dispatched");
    Ok(())
}
