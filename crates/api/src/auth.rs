// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session handling over the persisted account directory.
//!
//! This is an in-browser role-selection convenience, not a security
//! mechanism: credentials are stored and compared in plain text, and
//! the only hardening is that the persisted session record omits the
//! password field. Roles are plain strings at rest and typed here at
//! the boundary.

use tracing::{info, warn};

use crate::error::AuthError;
use fleetflow_persistence::{
    AccountData, PersistenceError, SessionData, StorageBackend, clear_session, load_accounts,
    load_session, save_accounts, save_session,
};

/// Operator roles for screen gating.
///
/// Roles gate which screens an operator sees; they carry no domain
/// authority — every store operation is available to any caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Dispatcher,
    SafetyOfficer,
    Finance,
}

impl Role {
    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Dispatcher => "Dispatcher",
            Self::SafetyOfficer => "Safety Officer",
            Self::Finance => "Finance",
        }
    }

    /// Parses a role from its stored string form.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownRole` if the string is not a known
    /// role.
    pub fn parse(s: &str) -> Result<Self, AuthError> {
        match s {
            "Manager" => Ok(Self::Manager),
            "Dispatcher" => Ok(Self::Dispatcher),
            "Safety Officer" => Ok(Self::SafetyOfficer),
            "Finance" => Ok(Self::Finance),
            _ => Err(AuthError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Authentication service holding the registered-account list and the
/// current session.
///
/// Constructed once at startup via [`AuthService::initialize`]; every
/// mutation takes the storage backend explicitly, the same way the
/// fleet store does.
#[derive(Debug)]
pub struct AuthService {
    accounts: Vec<AccountData>,
    session: Option<SessionData>,
}

impl AuthService {
    /// Loads the account directory and any saved session.
    ///
    /// A malformed stored session or account list is logged and treated
    /// as absent, never propagated.
    ///
    /// # Errors
    ///
    /// Returns an error if a backend read fails.
    pub fn initialize<B: StorageBackend>(backend: &B) -> Result<Self, PersistenceError> {
        let accounts = load_accounts(backend)?;
        let session = load_session(backend)?;
        Ok(Self { accounts, session })
    }

    /// The current session, if someone is logged in.
    #[must_use]
    pub const fn current_session(&self) -> Option<&SessionData> {
        self.session.as_ref()
    }

    /// Returns true if someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The typed role of the current session.
    ///
    /// A session whose stored role string is unknown yields `None` and
    /// is treated like an unauthenticated visitor by the route guard.
    #[must_use]
    pub fn current_role(&self) -> Option<Role> {
        let session = self.session.as_ref()?;
        match Role::parse(&session.role) {
            Ok(role) => Some(role),
            Err(_) => {
                warn!(role = %session.role, "Session carries an unknown role");
                None
            }
        }
    }

    /// The registered-account list.
    #[must_use]
    pub fn accounts(&self) -> &[AccountData] {
        &self.accounts
    }

    /// Logs in with an email/password pair.
    ///
    /// On success the session record (password stripped) is persisted
    /// and returned.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no account matches,
    /// or a storage error if persisting the session fails.
    pub fn login<B: StorageBackend>(
        &mut self,
        backend: &mut B,
        email: &str,
        password: &str,
    ) -> Result<SessionData, AuthError> {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.email == email && a.password.as_deref() == Some(password))
        else {
            return Err(AuthError::InvalidCredentials);
        };

        let session = account.to_session();
        save_session(backend, &session)?;
        self.session = Some(session.clone());
        info!(email, role = %session.role, "Login succeeded");
        Ok(session)
    }

    /// Registers a new account and logs it in.
    ///
    /// The account id is `u_<now_millis>`, matching the stored id
    /// scheme.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailAlreadyRegistered` if the email is
    /// taken, or a storage error if persisting fails.
    pub fn signup<B: StorageBackend>(
        &mut self,
        backend: &mut B,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
        now_millis: i64,
    ) -> Result<SessionData, AuthError> {
        if self.accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let account = AccountData {
            id: format!("u_{now_millis}"),
            email: String::from(email),
            password: Some(String::from(password)),
            name: String::from(name),
            role: String::from(role.as_str()),
        };
        self.accounts.push(account.clone());
        save_accounts(backend, &self.accounts)?;

        // Auto login after signup.
        let session = account.to_session();
        save_session(backend, &session)?;
        self.session = Some(session.clone());
        info!(email, role = %role, "Account registered");
        Ok(session)
    }

    /// Logs out, clearing the in-memory and persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if clearing the persisted record fails.
    pub fn logout<B: StorageBackend>(&mut self, backend: &mut B) -> Result<(), PersistenceError> {
        self.session = None;
        clear_session(backend)
    }
}
