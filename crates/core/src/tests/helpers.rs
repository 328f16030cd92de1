// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use fleetflow_domain::{
    Driver, DriverStatus, FuelLog, MaintenanceLog, MaintenanceStatus, Trip, TripStatus, Vehicle,
    VehicleStatus, VehicleType,
};

pub fn create_test_vehicle(id: &str, status: VehicleStatus, odometer: u64) -> Vehicle {
    Vehicle {
        id: String::from(id),
        name: String::from("Test Vehicle"),
        vehicle_type: VehicleType::Van,
        license_plate: String::from("TST-0000"),
        max_capacity: 1500.0,
        odometer,
        status,
        region: String::from("North"),
        last_service: String::from("2026-01-01"),
    }
}

pub fn create_test_driver(id: &str, status: DriverStatus, trips_completed: u32) -> Driver {
    Driver {
        id: String::from(id),
        name: String::from("Test Driver"),
        license_expiry: String::from("2027-06-15"),
        license_categories: vec![VehicleType::Van],
        status,
        safety_score: 90,
        trips_completed,
        phone: String::from("+1 555-0000"),
    }
}

pub fn create_test_trip(id: &str, vehicle_id: &str, driver_id: &str, status: TripStatus) -> Trip {
    Trip {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        driver_id: String::from(driver_id),
        origin: String::from("Warehouse A"),
        destination: String::from("Port Terminal"),
        cargo_weight: 500.0,
        status,
        created_at: String::from("2026-02-20T08:30:00"),
        completed_at: None,
    }
}

pub fn create_test_maintenance_log(id: &str, vehicle_id: &str) -> MaintenanceLog {
    MaintenanceLog {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        maintenance_type: String::from("Oil Change"),
        description: String::from("Routine service"),
        cost: 320.0,
        date: String::from("2026-02-18"),
        status: MaintenanceStatus::Scheduled,
    }
}

pub fn create_test_fuel_log(id: &str, vehicle_id: &str) -> FuelLog {
    FuelLog {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        liters: 50.0,
        cost: 82.50,
        date: String::from("2026-02-19"),
        odometer: 1000,
    }
}
