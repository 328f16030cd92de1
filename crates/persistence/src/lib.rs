// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence bridge for the FleetFlow fleet dashboard.
//!
//! State is mirrored to a simple string key-value store: one key per
//! collection, plus one key for the current session and one for the
//! registered-user list. Each value is the collection's plain JSON form.
//! There is no schema version field and no migration scheme — a
//! malformed stored value is treated as absent and replaced by the
//! built-in defaults on the next load.
//!
//! ## Storage backends
//!
//! - [`SqliteBackend`] — a single `kv_store` table, file-backed or
//!   in-memory. The durable analog of browser local storage (itself a
//!   SQLite-backed string store).
//! - [`MemoryBackend`] — a plain map, for tests and degraded
//!   deployments with no storage at all.
//!
//! Writes are write-through at full-collection granularity: every
//! mutation re-serializes each touched collection and writes it back
//! under its key. Two stores sharing one backend race last-write-wins;
//! that mirrors the multi-tab behavior of the persisted layout and is
//! deliberately unguarded.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod directory;
mod error;
mod keys;
mod store;

#[cfg(test)]
mod tests;

pub use backend::{MemoryBackend, SqliteBackend, StorageBackend};
pub use directory::{
    AccountData, SessionData, load_accounts, load_session, save_accounts, save_session,
    clear_session,
};
pub use error::PersistenceError;
pub use keys::{Collection, REGISTERED_USERS_KEY, SESSION_KEY};
pub use store::FleetStore;
