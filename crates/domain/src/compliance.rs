// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! License-expiry compliance checks.
//!
//! Compliance is computed, not stored. It's a pure function of the
//! driver roster and a caller-supplied "today" — the crate never reads
//! the wall clock.

use crate::error::DomainError;
use crate::types::Driver;
use time::Date;
use time::macros::format_description;

/// Days before expiry at which a license counts as expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 90;

const WIRE_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parses a stored `[year]-[month]-[day]` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// date in the stored format.
pub fn parse_wire_date(s: &str) -> Result<Date, DomainError> {
    Date::parse(s, WIRE_DATE).map_err(|e| DomainError::DateParseError {
        date_string: s.to_string(),
        error: e.to_string(),
    })
}

/// Returns true if the stored expiry date is strictly before `today`.
///
/// An unparseable expiry string is neither expired nor expiring soon;
/// it simply fails dispatch eligibility.
#[must_use]
pub fn is_license_expired(expiry: &str, today: Date) -> bool {
    parse_wire_date(expiry).is_ok_and(|d| d < today)
}

/// Returns true if the stored expiry date is in the future but within
/// the warning window.
#[must_use]
pub fn is_license_expiring_soon(expiry: &str, today: Date) -> bool {
    parse_wire_date(expiry)
        .is_ok_and(|d| d > today && (d - today).whole_days() < EXPIRY_WARNING_DAYS)
}

/// Drivers partitioned by license-expiry state.
///
/// A driver appears in at most one list; compliant drivers appear in
/// neither.
#[derive(Debug, Default)]
pub struct LicenseAlerts<'a> {
    /// Expiry date strictly before today.
    pub expired: Vec<&'a Driver>,
    /// Expiry within the next [`EXPIRY_WARNING_DAYS`] days.
    pub expiring_soon: Vec<&'a Driver>,
}

/// Partitions the roster into expired and expiring-soon drivers.
#[must_use]
pub fn license_alerts(drivers: &[Driver], today: Date) -> LicenseAlerts<'_> {
    let mut alerts = LicenseAlerts::default();
    for driver in drivers {
        if is_license_expired(&driver.license_expiry, today) {
            alerts.expired.push(driver);
        } else if is_license_expiring_soon(&driver.license_expiry, today) {
            alerts.expiring_soon.push(driver);
        }
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_parse_wire_date() {
        let parsed = parse_wire_date("2026-02-18");
        assert_eq!(parsed, Ok(date!(2026 - 02 - 18)));
    }

    #[test]
    fn test_parse_wire_date_rejects_garbage() {
        assert!(parse_wire_date("02/18/2026").is_err());
        assert!(parse_wire_date("").is_err());
    }

    #[test]
    fn test_expired_is_strictly_before_today() {
        let today = date!(2026 - 02 - 20);
        assert!(is_license_expired("2025-12-01", today));
        assert!(!is_license_expired("2026-02-20", today));
        assert!(!is_license_expired("2027-06-15", today));
    }

    #[test]
    fn test_expiring_soon_window() {
        let today = date!(2026 - 02 - 20);
        // 28 days out: soon
        assert!(is_license_expiring_soon("2026-03-20", today));
        // 90 days out exactly: not soon
        assert!(!is_license_expiring_soon("2026-05-21", today));
        // 89 days out: soon
        assert!(is_license_expiring_soon("2026-05-20", today));
        // already expired: not soon
        assert!(!is_license_expiring_soon("2025-12-01", today));
        // today itself: not soon
        assert!(!is_license_expiring_soon("2026-02-20", today));
    }

    #[test]
    fn test_unparseable_expiry_raises_no_alert() {
        let today = date!(2026 - 02 - 20);
        assert!(!is_license_expired("not-a-date", today));
        assert!(!is_license_expiring_soon("not-a-date", today));
    }
}
