// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Screen capabilities for role-gated navigation.
//!
//! One capability check feeds both nav rendering and route guarding,
//! so "what's shown" and "what's enforced" cannot drift. Capabilities
//! are advisory screen gating only; they carry no domain authority.

use crate::auth::Role;

/// The routed screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CommandCenter,
    VehicleRegistry,
    TripDispatcher,
    DriverProfiles,
    Maintenance,
    Analytics,
}

impl Screen {
    /// All screens, in nav order.
    pub const ALL: [Self; 6] = [
        Self::CommandCenter,
        Self::VehicleRegistry,
        Self::TripDispatcher,
        Self::DriverProfiles,
        Self::Maintenance,
        Self::Analytics,
    ];

    /// Display label for the nav entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CommandCenter => "Command Center",
            Self::VehicleRegistry => "Vehicle Registry",
            Self::TripDispatcher => "Trip Dispatcher",
            Self::DriverProfiles => "Driver Profiles",
            Self::Maintenance => "Maintenance",
            Self::Analytics => "Analytics",
        }
    }
}

impl Role {
    /// Returns true if this role may access the given screen.
    ///
    /// Every role keeps the Command Center: it is the guard's redirect
    /// target, so it must be universally accessible.
    #[must_use]
    pub const fn can_access(self, screen: Screen) -> bool {
        match self {
            Self::Manager => true,
            Self::Dispatcher => matches!(
                screen,
                Screen::CommandCenter | Screen::VehicleRegistry | Screen::TripDispatcher
            ),
            Self::SafetyOfficer => matches!(
                screen,
                Screen::CommandCenter | Screen::DriverProfiles | Screen::Maintenance
            ),
            Self::Finance => matches!(screen, Screen::CommandCenter | Screen::Analytics),
        }
    }

    /// The screens this role's nav should render, in nav order.
    #[must_use]
    pub fn allowed_screens(self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|screen| self.can_access(*screen))
            .collect()
    }
}

/// The outcome of resolving a screen request against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render the requested screen.
    Granted,
    /// No session: go to the login screen.
    RedirectToLogin,
    /// Session lacks access: go back to the home screen.
    RedirectToHome,
}

/// Resolves a screen request for the given (possibly absent) role.
#[must_use]
pub fn resolve_route(role: Option<Role>, screen: Screen) -> RouteOutcome {
    match role {
        None => RouteOutcome::RedirectToLogin,
        Some(role) if role.can_access(screen) => RouteOutcome::Granted,
        Some(_) => RouteOutcome::RedirectToHome,
    }
}
