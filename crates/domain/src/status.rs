// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status and classification enums for fleet entities.
//!
//! Every enum round-trips through the human-readable strings used by the
//! persisted JSON layout ("On Trip", "In Shop", ...). Status changes are
//! operator-initiated only; nothing in the system advances a status based
//! on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Vehicle classification.
///
/// The type determines which drivers may be assigned to a vehicle
/// (license categories) and the revenue/acquisition lookup tables used
/// by the analytics views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Truck,
    Van,
    Bike,
}

impl VehicleType {
    /// Returns the string representation of this vehicle type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::Bike => "Bike",
        }
    }

    /// All vehicle types in display order.
    pub const ALL: [Self; 3] = [Self::Truck, Self::Van, Self::Bike];
}

impl FromStr for VehicleType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Truck" => Ok(Self::Truck),
            "Van" => Ok(Self::Van),
            "Bike" => Ok(Self::Bike),
            _ => Err(DomainError::InvalidVehicleType(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vehicle availability states.
///
/// `Available` is authoritative for dispatch eligibility: only an
/// available vehicle may be committed to a new trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    /// Ready to be assigned to a trip.
    Available,
    /// Committed to a dispatched trip.
    #[serde(rename = "On Trip")]
    OnTrip,
    /// Undergoing maintenance; blocks trip assignment.
    #[serde(rename = "In Shop")]
    InShop,
    /// Withdrawn from the fleet; excluded from utilization and analytics.
    Retired,
}

impl VehicleStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnTrip => "On Trip",
            Self::InShop => "In Shop",
            Self::Retired => "Retired",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(Self::Available),
            "On Trip" => Ok(Self::OnTrip),
            "In Shop" => Ok(Self::InShop),
            "Retired" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidVehicleStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Driver duty states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriverStatus {
    /// Working and free to take a trip.
    #[serde(rename = "On Duty")]
    OnDuty,
    /// Not working, but still dispatch-eligible.
    #[serde(rename = "Off Duty")]
    OffDuty,
    /// Barred from dispatch.
    Suspended,
    /// Committed to a dispatched trip.
    #[serde(rename = "On Trip")]
    OnTrip,
}

impl DriverStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnDuty => "On Duty",
            Self::OffDuty => "Off Duty",
            Self::Suspended => "Suspended",
            Self::OnTrip => "On Trip",
        }
    }
}

impl FromStr for DriverStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "On Duty" => Ok(Self::OnDuty),
            "Off Duty" => Ok(Self::OffDuty),
            "Suspended" => Ok(Self::Suspended),
            "On Trip" => Ok(Self::OnTrip),
            _ => Err(DomainError::InvalidDriverStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trip lifecycle states.
///
/// `Draft` trips await dispatch; `Dispatched` trips hold their vehicle
/// and driver in "On Trip"; `Completed` and `Cancelled` are terminal.
/// `Cancelled` is set externally (seeded or entered by an operator tool)
/// and no operation in this system produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripStatus {
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Dispatched => "Dispatched",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns true if this status is terminal (no transition leaves it).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for TripStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(Self::Draft),
            "Dispatched" => Ok(Self::Dispatched),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidTripStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maintenance log states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidMaintenanceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
