// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AccountData, MemoryBackend, SESSION_KEY, StorageBackend, clear_session, load_accounts,
    load_session, save_accounts, save_session,
};

fn create_test_account(email: &str) -> AccountData {
    AccountData {
        id: String::from("u_1755600000000"),
        email: String::from(email),
        password: Some(String::from("hunter2")),
        name: String::from("Dana Ops"),
        role: String::from("Dispatcher"),
    }
}

#[test]
fn test_accounts_default_to_empty() {
    let backend = MemoryBackend::new();
    assert!(load_accounts(&backend).unwrap().is_empty());
}

#[test]
fn test_accounts_round_trip() {
    let mut backend = MemoryBackend::new();
    let accounts = vec![create_test_account("dana@fleet.test")];

    save_accounts(&mut backend, &accounts).unwrap();
    assert_eq!(load_accounts(&backend).unwrap(), accounts);
}

#[test]
fn test_malformed_account_list_is_discarded() {
    let mut backend = MemoryBackend::new();
    backend.put(crate::REGISTERED_USERS_KEY, "][").unwrap();

    assert!(load_accounts(&backend).unwrap().is_empty());
}

#[test]
fn test_session_record_omits_password() {
    let account = create_test_account("dana@fleet.test");
    let session = account.to_session();

    let raw = serde_json::to_string(&session).unwrap();
    assert!(!raw.contains("password"));
    assert!(!raw.contains("hunter2"));
    assert!(raw.contains("\"role\":\"Dispatcher\""));
}

#[test]
fn test_session_save_load_clear() {
    let mut backend = MemoryBackend::new();
    assert_eq!(load_session(&backend).unwrap(), None);

    let session = create_test_account("dana@fleet.test").to_session();
    save_session(&mut backend, &session).unwrap();
    assert_eq!(load_session(&backend).unwrap(), Some(session));

    clear_session(&mut backend).unwrap();
    assert_eq!(load_session(&backend).unwrap(), None);
}

#[test]
fn test_malformed_session_is_treated_as_absent() {
    let mut backend = MemoryBackend::new();
    backend.put(SESSION_KEY, "not a session").unwrap();

    assert_eq!(load_session(&backend).unwrap(), None);
}

#[test]
fn test_stored_account_without_password_still_parses() {
    // Wire compatibility: the stored list may contain records whose
    // password key was never written.
    let raw = r#"[{"id":"u_1","email":"a@b.c","name":"A","role":"Finance"}]"#;
    let mut backend = MemoryBackend::new();
    backend.put(crate::REGISTERED_USERS_KEY, raw).unwrap();

    let accounts = load_accounts(&backend).unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].password, None);
}
