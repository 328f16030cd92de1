// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Built-in default dataset.
//!
//! Used by the persistence bridge as the fallback when a stored
//! collection is absent or malformed.

use crate::state::FleetState;
use fleetflow_domain::{
    Driver, DriverStatus, FuelLog, MaintenanceLog, MaintenanceStatus, Trip, TripStatus, Vehicle,
    VehicleStatus, VehicleType,
};

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    name: &str,
    vehicle_type: VehicleType,
    license_plate: &str,
    max_capacity: f64,
    odometer: u64,
    status: VehicleStatus,
    region: &str,
    last_service: &str,
) -> Vehicle {
    Vehicle {
        id: String::from(id),
        name: String::from(name),
        vehicle_type,
        license_plate: String::from(license_plate),
        max_capacity,
        odometer,
        status,
        region: String::from(region),
        last_service: String::from(last_service),
    }
}

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    license_expiry: &str,
    license_categories: &[VehicleType],
    status: DriverStatus,
    safety_score: u8,
    trips_completed: u32,
    phone: &str,
) -> Driver {
    Driver {
        id: String::from(id),
        name: String::from(name),
        license_expiry: String::from(license_expiry),
        license_categories: license_categories.to_vec(),
        status,
        safety_score,
        trips_completed,
        phone: String::from(phone),
    }
}

#[allow(clippy::too_many_arguments)]
fn trip(
    id: &str,
    vehicle_id: &str,
    driver_id: &str,
    origin: &str,
    destination: &str,
    cargo_weight: f64,
    status: TripStatus,
    created_at: &str,
    completed_at: Option<&str>,
) -> Trip {
    Trip {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        driver_id: String::from(driver_id),
        origin: String::from(origin),
        destination: String::from(destination),
        cargo_weight,
        status,
        created_at: String::from(created_at),
        completed_at: completed_at.map(String::from),
    }
}

fn maintenance_log(
    id: &str,
    vehicle_id: &str,
    maintenance_type: &str,
    description: &str,
    cost: f64,
    date: &str,
    status: MaintenanceStatus,
) -> MaintenanceLog {
    MaintenanceLog {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        maintenance_type: String::from(maintenance_type),
        description: String::from(description),
        cost,
        date: String::from(date),
        status,
    }
}

fn fuel_log(id: &str, vehicle_id: &str, liters: f64, cost: f64, date: &str, odometer: u64) -> FuelLog {
    FuelLog {
        id: String::from(id),
        vehicle_id: String::from(vehicle_id),
        liters,
        cost,
        date: String::from(date),
        odometer,
    }
}

/// The default dataset: a small mixed fleet mid-operation, with two
/// dispatched trips in flight and one vehicle in the shop.
#[must_use]
pub fn seed_state() -> FleetState {
    use DriverStatus as D;
    use MaintenanceStatus as M;
    use TripStatus as T;
    use VehicleStatus as V;
    use VehicleType::{Bike, Truck, Van};

    FleetState {
        vehicles: vec![
            vehicle("v1", "Freightliner M2", Truck, "TRK-1001", 8000.0, 124_500, V::OnTrip, "North", "2025-12-10"),
            vehicle("v2", "Mercedes Sprinter", Van, "VAN-2034", 1500.0, 67_200, V::Available, "South", "2026-01-15"),
            vehicle("v3", "Isuzu NPR", Truck, "TRK-1042", 5500.0, 89_300, V::InShop, "East", "2026-02-01"),
            vehicle("v4", "Ford Transit", Van, "VAN-2078", 1200.0, 43_100, V::Available, "West", "2026-01-28"),
            vehicle("v5", "Honda PCX", Bike, "BKE-3012", 30.0, 15_200, V::OnTrip, "Central", "2026-02-10"),
            vehicle("v6", "Volvo FH16", Truck, "TRK-1088", 12_000.0, 210_400, V::Available, "North", "2025-11-20"),
            vehicle("v7", "Peugeot Partner", Van, "VAN-2091", 800.0, 52_600, V::Retired, "South", "2025-08-05"),
            vehicle("v8", "Yamaha NMAX", Bike, "BKE-3045", 25.0, 8900, V::Available, "Central", "2026-02-14"),
        ],
        drivers: vec![
            driver("d1", "Alex Martinez", "2027-06-15", &[Truck, Van], D::OnTrip, 92, 187, "+1 555-0101"),
            driver("d2", "Sarah Chen", "2026-03-20", &[Van, Bike], D::OnDuty, 97, 234, "+1 555-0102"),
            driver("d3", "James Okoro", "2025-12-01", &[Truck], D::OffDuty, 78, 145, "+1 555-0103"),
            driver("d4", "Maria Santos", "2028-01-10", &[Truck, Van, Bike], D::OnTrip, 95, 312, "+1 555-0104"),
            driver("d5", "Tom Wilson", "2026-08-30", &[Van], D::Suspended, 54, 89, "+1 555-0105"),
            driver("d6", "Lena Petrova", "2027-11-22", &[Truck, Van], D::OnDuty, 88, 201, "+1 555-0106"),
        ],
        trips: vec![
            trip("t1", "v1", "d1", "Warehouse A", "Port Terminal", 6200.0, T::Dispatched, "2026-02-20T08:30:00", None),
            trip("t2", "v5", "d4", "Hub Central", "District 5 Depot", 22.0, T::Dispatched, "2026-02-20T09:15:00", None),
            trip("t3", "v2", "d2", "Factory B", "Retail Store 12", 980.0, T::Completed, "2026-02-19T07:00:00", Some("2026-02-19T14:30:00")),
            trip("t4", "v6", "d6", "Distribution Center", "Airport Cargo", 9500.0, T::Draft, "2026-02-20T10:00:00", None),
            trip("t5", "v4", "d3", "Supplier C", "Warehouse A", 750.0, T::Completed, "2026-02-18T06:00:00", Some("2026-02-18T11:45:00")),
            trip("t6", "v2", "d2", "Port Terminal", "Cold Storage", 1100.0, T::Cancelled, "2026-02-17T13:00:00", None),
        ],
        maintenance_logs: vec![
            maintenance_log("m1", "v3", "Oil Change", "Scheduled 10k km oil change", 320.0, "2026-02-18", M::InProgress),
            maintenance_log("m2", "v1", "Tire Replacement", "Front axle tire replacement", 1200.0, "2026-02-10", M::Completed),
            maintenance_log("m3", "v6", "Brake Inspection", "Annual brake system inspection", 450.0, "2026-02-15", M::Completed),
            maintenance_log("m4", "v2", "AC Repair", "Compressor replacement", 890.0, "2026-02-20", M::Scheduled),
            maintenance_log("m5", "v7", "Engine Overhaul", "Major engine rebuild before retirement", 4500.0, "2025-07-20", M::Completed),
        ],
        fuel_logs: vec![
            fuel_log("f1", "v1", 120.0, 198.0, "2026-02-19", 124_300),
            fuel_log("f2", "v2", 55.0, 90.75, "2026-02-18", 67_100),
            fuel_log("f3", "v5", 8.0, 13.20, "2026-02-19", 15_100),
            fuel_log("f4", "v6", 180.0, 297.0, "2026-02-17", 210_200),
            fuel_log("f5", "v4", 45.0, 74.25, "2026-02-16", 42_900),
            fuel_log("f6", "v1", 115.0, 189.75, "2026-02-15", 124_000),
            fuel_log("f7", "v2", 50.0, 82.50, "2026-02-14", 66_800),
        ],
    }
}
