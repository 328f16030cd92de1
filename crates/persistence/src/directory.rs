// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registered-account directory and current-session record.
//!
//! Stored alongside the fleet collections under their own keys. This is
//! explicitly not a security mechanism: credentials are stored and
//! compared in plain text by the api layer, and the only guarantee here
//! is that the persisted session record carries no password field.
//!
//! `role` stays a plain string at this layer; the api crate parses it
//! into a typed role at the boundary.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::backend::StorageBackend;
use crate::error::PersistenceError;
use crate::keys::{REGISTERED_USERS_KEY, SESSION_KEY};

/// A registered account, as stored in the registered-user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    /// Plain-text credential. Absent from session records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub name: String,
    pub role: String,
}

impl AccountData {
    /// The session view of this account: same identity, no password.
    #[must_use]
    pub fn to_session(&self) -> SessionData {
        SessionData {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// The current-session record persisted under [`SESSION_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

/// Loads the registered-user list; absent or malformed values yield an
/// empty directory.
///
/// # Errors
///
/// Returns an error if the backend read fails.
pub fn load_accounts<B: StorageBackend>(backend: &B) -> Result<Vec<AccountData>, PersistenceError> {
    match backend.get(REGISTERED_USERS_KEY)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!(key = REGISTERED_USERS_KEY, error = %e, "Discarding malformed account list");
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

/// Writes back the full registered-user list.
///
/// # Errors
///
/// Returns an error if the backend write fails.
pub fn save_accounts<B: StorageBackend>(
    backend: &mut B,
    accounts: &[AccountData],
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(accounts)?;
    backend.put(REGISTERED_USERS_KEY, &raw)
}

/// Loads the current-session record, if one is stored and well-formed.
///
/// # Errors
///
/// Returns an error if the backend read fails. A malformed record is
/// logged and treated as absent.
pub fn load_session<B: StorageBackend>(backend: &B) -> Result<Option<SessionData>, PersistenceError> {
    match backend.get(SESSION_KEY)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => {
                warn!(key = SESSION_KEY, error = %e, "Discarding malformed session record");
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

/// Persists the current-session record.
///
/// # Errors
///
/// Returns an error if the backend write fails.
pub fn save_session<B: StorageBackend>(
    backend: &mut B,
    session: &SessionData,
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(session)?;
    backend.put(SESSION_KEY, &raw)
}

/// Removes the current-session record.
///
/// # Errors
///
/// Returns an error if the backend write fails.
pub fn clear_session<B: StorageBackend>(backend: &mut B) -> Result<(), PersistenceError> {
    backend.delete(SESSION_KEY)
}
