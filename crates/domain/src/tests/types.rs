// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Driver, DriverStatus, FuelLog, MaintenanceLog, MaintenanceStatus, Trip, TripStatus, Vehicle,
    VehicleStatus, VehicleType,
};

#[test]
fn test_vehicle_serializes_to_wire_layout() {
    let vehicle = Vehicle {
        id: String::from("v2"),
        name: String::from("Mercedes Sprinter"),
        vehicle_type: VehicleType::Van,
        license_plate: String::from("VAN-2034"),
        max_capacity: 1500.0,
        odometer: 67200,
        status: VehicleStatus::Available,
        region: String::from("South"),
        last_service: String::from("2026-01-15"),
    };

    let json = serde_json::to_value(&vehicle).unwrap();
    assert_eq!(json["type"], "Van");
    assert_eq!(json["licensePlate"], "VAN-2034");
    assert_eq!(json["maxCapacity"], 1500.0);
    assert_eq!(json["lastService"], "2026-01-15");
    assert_eq!(json["status"], "Available");
}

#[test]
fn test_vehicle_round_trips_field_for_field() {
    let vehicle = Vehicle {
        id: String::from("v1"),
        name: String::from("Freightliner M2"),
        vehicle_type: VehicleType::Truck,
        license_plate: String::from("TRK-1001"),
        max_capacity: 8000.0,
        odometer: 124_500,
        status: VehicleStatus::OnTrip,
        region: String::from("North"),
        last_service: String::from("2025-12-10"),
    };

    let json = serde_json::to_string(&vehicle).unwrap();
    let parsed: Vehicle = serde_json::from_str(&json).unwrap();
    assert_eq!(vehicle, parsed);
}

#[test]
fn test_driver_round_trips_field_for_field() {
    let driver = Driver {
        id: String::from("d2"),
        name: String::from("Sarah Chen"),
        license_expiry: String::from("2026-03-20"),
        license_categories: vec![VehicleType::Van, VehicleType::Bike],
        status: DriverStatus::OnDuty,
        safety_score: 97,
        trips_completed: 234,
        phone: String::from("+1 555-0102"),
    };

    let json = serde_json::to_string(&driver).unwrap();
    let parsed: Driver = serde_json::from_str(&json).unwrap();
    assert_eq!(driver, parsed);
    assert!(json.contains("\"licenseExpiry\""));
    assert!(json.contains("\"On Duty\""));
}

#[test]
fn test_trip_omits_absent_completion_timestamp() {
    let trip = Trip {
        id: String::from("t4"),
        vehicle_id: String::from("v6"),
        driver_id: String::from("d6"),
        origin: String::from("Distribution Center"),
        destination: String::from("Airport Cargo"),
        cargo_weight: 9500.0,
        status: TripStatus::Draft,
        created_at: String::from("2026-02-20T10:00:00"),
        completed_at: None,
    };

    let json = serde_json::to_string(&trip).unwrap();
    assert!(!json.contains("completedAt"));
    assert!(json.contains("\"vehicleId\":\"v6\""));

    let parsed: Trip = serde_json::from_str(&json).unwrap();
    assert_eq!(trip, parsed);
}

#[test]
fn test_trip_keeps_completion_timestamp() {
    let trip = Trip {
        id: String::from("t3"),
        vehicle_id: String::from("v2"),
        driver_id: String::from("d2"),
        origin: String::from("Factory B"),
        destination: String::from("Retail Store 12"),
        cargo_weight: 980.0,
        status: TripStatus::Completed,
        created_at: String::from("2026-02-19T07:00:00"),
        completed_at: Some(String::from("2026-02-19T14:30:00")),
    };

    let json = serde_json::to_value(&trip).unwrap();
    assert_eq!(json["completedAt"], "2026-02-19T14:30:00");
    assert_eq!(json["status"], "Completed");
}

#[test]
fn test_maintenance_log_wire_layout() {
    let log = MaintenanceLog {
        id: String::from("m1"),
        vehicle_id: String::from("v3"),
        maintenance_type: String::from("Oil Change"),
        description: String::from("Scheduled 10k km oil change"),
        cost: 320.0,
        date: String::from("2026-02-18"),
        status: MaintenanceStatus::InProgress,
    };

    let json = serde_json::to_value(&log).unwrap();
    assert_eq!(json["type"], "Oil Change");
    assert_eq!(json["status"], "In Progress");

    let parsed: MaintenanceLog = serde_json::from_str(&json.to_string()).unwrap();
    assert_eq!(log, parsed);
}

#[test]
fn test_fuel_log_round_trips_field_for_field() {
    let log = FuelLog {
        id: String::from("f2"),
        vehicle_id: String::from("v2"),
        liters: 55.0,
        cost: 90.75,
        date: String::from("2026-02-18"),
        odometer: 67100,
    };

    let json = serde_json::to_string(&log).unwrap();
    let parsed: FuelLog = serde_json::from_str(&json).unwrap();
    assert_eq!(log, parsed);
}

#[test]
fn test_collection_round_trips_as_json_array() {
    let vehicles = vec![
        Vehicle {
            id: String::from("v1"),
            name: String::from("Freightliner M2"),
            vehicle_type: VehicleType::Truck,
            license_plate: String::from("TRK-1001"),
            max_capacity: 8000.0,
            odometer: 124_500,
            status: VehicleStatus::OnTrip,
            region: String::from("North"),
            last_service: String::from("2025-12-10"),
        },
        Vehicle {
            id: String::from("v8"),
            name: String::from("Yamaha NMAX"),
            vehicle_type: VehicleType::Bike,
            license_plate: String::from("BKE-3045"),
            max_capacity: 25.0,
            odometer: 8900,
            status: VehicleStatus::Available,
            region: String::from("Central"),
            last_service: String::from("2026-02-14"),
        },
    ];

    let json = serde_json::to_string(&vehicles).unwrap();
    let parsed: Vec<Vehicle> = serde_json::from_str(&json).unwrap();
    assert_eq!(vehicles, parsed);
}
