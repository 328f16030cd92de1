// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use fleetflow_persistence::PersistenceError;

/// Authentication errors.
///
/// The credential messages are user-facing copy and part of the
/// observed contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No registered account matches the email/password pair.
    InvalidCredentials,
    /// Signup attempted with an email that is already registered.
    EmailAlreadyRegistered,
    /// A stored role string is not one of the four known roles.
    UnknownRole(String),
    /// Reading or writing the account directory failed.
    Storage(PersistenceError),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid email or password."),
            Self::EmailAlreadyRegistered => write!(f, "Email is already registered."),
            Self::UnknownRole(role) => write!(f, "Unknown role: {role}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<PersistenceError> for AuthError {
    fn from(err: PersistenceError) -> Self {
        Self::Storage(err)
    }
}
