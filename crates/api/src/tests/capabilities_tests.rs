// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Role, RouteOutcome, Screen, resolve_route};

#[test]
fn test_manager_sees_every_screen() {
    assert_eq!(Role::Manager.allowed_screens(), Screen::ALL.to_vec());
}

#[test]
fn test_dispatcher_screens() {
    assert_eq!(
        Role::Dispatcher.allowed_screens(),
        vec![
            Screen::CommandCenter,
            Screen::VehicleRegistry,
            Screen::TripDispatcher
        ]
    );
    assert!(!Role::Dispatcher.can_access(Screen::Analytics));
    assert!(!Role::Dispatcher.can_access(Screen::DriverProfiles));
}

#[test]
fn test_safety_officer_screens() {
    assert_eq!(
        Role::SafetyOfficer.allowed_screens(),
        vec![
            Screen::CommandCenter,
            Screen::DriverProfiles,
            Screen::Maintenance
        ]
    );
    assert!(!Role::SafetyOfficer.can_access(Screen::TripDispatcher));
}

#[test]
fn test_finance_screens() {
    assert_eq!(
        Role::Finance.allowed_screens(),
        vec![Screen::CommandCenter, Screen::Analytics]
    );
    assert!(!Role::Finance.can_access(Screen::VehicleRegistry));
}

#[test]
fn test_every_role_keeps_the_redirect_target() {
    for role in [
        Role::Manager,
        Role::Dispatcher,
        Role::SafetyOfficer,
        Role::Finance,
    ] {
        assert!(
            role.can_access(Screen::CommandCenter),
            "{role} lost its home screen"
        );
    }
}

#[test]
fn test_route_resolution() {
    assert_eq!(
        resolve_route(None, Screen::CommandCenter),
        RouteOutcome::RedirectToLogin
    );
    assert_eq!(
        resolve_route(Some(Role::Finance), Screen::Analytics),
        RouteOutcome::Granted
    );
    assert_eq!(
        resolve_route(Some(Role::Finance), Screen::TripDispatcher),
        RouteOutcome::RedirectToHome
    );
}

#[test]
fn test_nav_and_guard_agree() {
    // The consolidation contract: a screen is rendered in the nav
    // exactly when the route guard grants it.
    for role in [
        Role::Manager,
        Role::Dispatcher,
        Role::SafetyOfficer,
        Role::Finance,
    ] {
        let rendered = role.allowed_screens();
        for screen in Screen::ALL {
            let granted = resolve_route(Some(role), screen) == RouteOutcome::Granted;
            assert_eq!(rendered.contains(&screen), granted);
        }
    }
}

#[test]
fn test_screen_labels() {
    assert_eq!(Screen::CommandCenter.label(), "Command Center");
    assert_eq!(Screen::VehicleRegistry.label(), "Vehicle Registry");
    assert_eq!(Screen::TripDispatcher.label(), "Trip Dispatcher");
    assert_eq!(Screen::DriverProfiles.label(), "Driver Profiles");
    assert_eq!(Screen::Maintenance.label(), "Maintenance");
    assert_eq!(Screen::Analytics.label(), "Analytics");
}
