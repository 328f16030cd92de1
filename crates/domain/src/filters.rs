// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registry search and filter queries.

use crate::status::{TripStatus, VehicleStatus, VehicleType};
use crate::types::{Trip, Vehicle};

/// Filters the vehicle registry.
///
/// `query` matches case-insensitively against name or license plate; an
/// empty query matches everything. `None` filters mean "All".
#[must_use]
pub fn search_vehicles<'a>(
    vehicles: &'a [Vehicle],
    query: &str,
    type_filter: Option<VehicleType>,
    status_filter: Option<VehicleStatus>,
) -> Vec<&'a Vehicle> {
    let query = query.to_lowercase();
    vehicles
        .iter()
        .filter(|v| {
            let matches_query = query.is_empty()
                || v.name.to_lowercase().contains(&query)
                || v.license_plate.to_lowercase().contains(&query);
            let matches_type = type_filter.is_none_or(|t| v.vehicle_type == t);
            let matches_status = status_filter.is_none_or(|s| v.status == s);
            matches_query && matches_type && matches_status
        })
        .collect()
}

/// Filters trips by status; `None` means "All".
#[must_use]
pub fn trips_with_status(trips: &[Trip], status: Option<TripStatus>) -> Vec<&Trip> {
    trips
        .iter()
        .filter(|t| status.is_none_or(|s| t.status == s))
        .collect()
}
