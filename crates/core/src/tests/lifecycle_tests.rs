// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_test_driver, create_test_fuel_log, create_test_maintenance_log, create_test_trip,
    create_test_vehicle,
};
use crate::FleetState;
use fleetflow_domain::{DriverStatus, MaintenanceStatus, TripStatus, VehicleStatus};

fn state_with_draft_trip() -> FleetState {
    let mut state = FleetState::new();
    state.add_vehicle(create_test_vehicle("v1", VehicleStatus::Available, 100_000));
    state.add_driver(create_test_driver("d1", DriverStatus::OnDuty, 5));
    state.create_trip(create_test_trip("t1", "v1", "d1", TripStatus::Draft));
    state
}

#[test]
fn test_start_trip_commits_vehicle_and_driver_together() {
    let mut state = state_with_draft_trip();

    state.start_trip("t1");

    assert_eq!(state.trip("t1").map(|t| t.status), Some(TripStatus::Dispatched));
    assert_eq!(
        state.vehicle("v1").map(|v| v.status),
        Some(VehicleStatus::OnTrip)
    );
    assert_eq!(
        state.driver("d1").map(|d| d.status),
        Some(DriverStatus::OnTrip)
    );
}

#[test]
fn test_start_trip_with_unknown_id_is_a_no_op() {
    let mut state = state_with_draft_trip();

    state.start_trip("t9");

    assert_eq!(state.trip("t1").map(|t| t.status), Some(TripStatus::Draft));
    assert_eq!(
        state.vehicle("v1").map(|v| v.status),
        Some(VehicleStatus::Available)
    );
    assert_eq!(
        state.driver("d1").map(|d| d.status),
        Some(DriverStatus::OnDuty)
    );
}

#[test]
fn test_start_trip_with_dangling_references_still_dispatches() {
    let mut state = FleetState::new();
    state.create_trip(create_test_trip("t1", "ghost-v", "ghost-d", TripStatus::Draft));

    state.start_trip("t1");

    assert_eq!(state.trip("t1").map(|t| t.status), Some(TripStatus::Dispatched));
}

#[test]
fn test_complete_trip_full_scenario() {
    let mut state = state_with_draft_trip();
    state.start_trip("t1");

    state.complete_trip("t1", 100_500, "2026-02-20T16:45:00");

    let trip = state.trip("t1").unwrap();
    assert_eq!(trip.status, TripStatus::Completed);
    assert_eq!(trip.completed_at.as_deref(), Some("2026-02-20T16:45:00"));

    let vehicle = state.vehicle("v1").unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);
    assert_eq!(vehicle.odometer, 100_500);

    let driver = state.driver("d1").unwrap();
    assert_eq!(driver.status, DriverStatus::OnDuty);
    assert_eq!(driver.trips_completed, 6);
}

#[test]
fn test_complete_trip_odometer_is_monotonic() {
    let mut state = state_with_draft_trip();
    state.start_trip("t1");

    // A final reading below the current odometer never lowers it.
    state.complete_trip("t1", 99_000, "2026-02-20T16:45:00");

    assert_eq!(state.vehicle("v1").map(|v| v.odometer), Some(100_000));
}

#[test]
fn test_complete_trip_increments_driver_counter_per_trip() {
    let mut state = FleetState::new();
    state.add_vehicle(create_test_vehicle("v1", VehicleStatus::Available, 1000));
    state.add_driver(create_test_driver("d1", DriverStatus::OnDuty, 0));

    for i in 0..3 {
        let trip_id = format!("t{i}");
        state.create_trip(create_test_trip(&trip_id, "v1", "d1", TripStatus::Draft));
        state.start_trip(&trip_id);
        state.complete_trip(&trip_id, 1000 + i, "2026-02-20T16:45:00");
    }

    assert_eq!(state.driver("d1").map(|d| d.trips_completed), Some(3));
}

#[test]
fn test_complete_trip_with_unknown_id_is_a_no_op() {
    let mut state = state_with_draft_trip();
    state.start_trip("t1");

    state.complete_trip("t9", 999_999, "2026-02-20T16:45:00");

    assert_eq!(state.trip("t1").map(|t| t.status), Some(TripStatus::Dispatched));
    assert_eq!(state.vehicle("v1").map(|v| v.odometer), Some(100_000));
}

#[test]
fn test_add_maintenance_log_forces_vehicle_in_shop() {
    for prior in [
        VehicleStatus::Available,
        VehicleStatus::OnTrip,
        VehicleStatus::Retired,
    ] {
        let mut state = FleetState::new();
        state.add_vehicle(create_test_vehicle("v2", prior, 1000));

        state.add_maintenance_log(create_test_maintenance_log("m1", "v2"));

        assert_eq!(
            state.vehicle("v2").map(|v| v.status),
            Some(VehicleStatus::InShop),
            "prior status {prior:?} must not matter"
        );
    }
}

#[test]
fn test_complete_maintenance_log_restores_available() {
    let mut state = FleetState::new();
    state.add_vehicle(create_test_vehicle("v2", VehicleStatus::Available, 1000));
    state.add_maintenance_log(create_test_maintenance_log("m1", "v2"));

    state.complete_maintenance_log("m1");

    assert_eq!(
        state.maintenance_log("m1").map(|m| m.status),
        Some(MaintenanceStatus::Completed)
    );
    assert_eq!(
        state.vehicle("v2").map(|v| v.status),
        Some(VehicleStatus::Available)
    );
}

#[test]
fn test_complete_maintenance_log_is_idempotent() {
    let mut state = FleetState::new();
    state.add_vehicle(create_test_vehicle("v2", VehicleStatus::Available, 1000));
    state.add_maintenance_log(create_test_maintenance_log("m1", "v2"));

    state.complete_maintenance_log("m1");
    state.complete_maintenance_log("m1");

    assert_eq!(
        state.maintenance_log("m1").map(|m| m.status),
        Some(MaintenanceStatus::Completed)
    );
    assert_eq!(
        state.vehicle("v2").map(|v| v.status),
        Some(VehicleStatus::Available)
    );
}

#[test]
fn test_maintenance_log_append_survives_dangling_vehicle() {
    let mut state = FleetState::new();

    state.add_maintenance_log(create_test_maintenance_log("m1", "ghost"));

    assert_eq!(state.maintenance_logs.len(), 1);
    state.complete_maintenance_log("m1");
    assert_eq!(
        state.maintenance_log("m1").map(|m| m.status),
        Some(MaintenanceStatus::Completed)
    );
}

#[test]
fn test_add_fuel_log_forces_vehicle_available() {
    // The documented quirk: fuel logging ends a shop or trip visit,
    // whatever the vehicle was doing.
    for prior in [
        VehicleStatus::OnTrip,
        VehicleStatus::InShop,
        VehicleStatus::Retired,
    ] {
        let mut state = FleetState::new();
        state.add_vehicle(create_test_vehicle("v1", prior, 1000));

        state.add_fuel_log(create_test_fuel_log("f1", "v1"));

        assert_eq!(state.fuel_logs.len(), 1);
        assert_eq!(
            state.vehicle("v1").map(|v| v.status),
            Some(VehicleStatus::Available),
            "prior status {prior:?} must not matter"
        );
    }
}

#[test]
fn test_fuel_log_append_survives_dangling_vehicle() {
    let mut state = FleetState::new();

    state.add_fuel_log(create_test_fuel_log("f1", "ghost"));

    assert_eq!(state.fuel_logs.len(), 1);
}
