//! Contracts for per-host local file selection.

use crate::common::*;
use inistack::{FixedHost, StoreError, Value};

/// CONTRACT: Without a per-host file the default local file is used.
#[test]
fn contract_default_local_without_host_file() {
    let env = TestEnv::with_global(GLOBAL_INI);
    let store = env.store_for_host("x.example.com");

    assert_eq!(store.local_path(), env.config_path("config.ini"));
}

/// CONTRACT: An existing per-host file wins over the default local file.
#[test]
fn contract_existing_host_file_is_selected() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    env.write_config("x.example.com.config.ini", "[General]\ntimeout = 42\n");
    let mut store = env.store_for_host("x.example.com");

    assert_eq!(store.local_path(), env.config_path("x.example.com.config.ini"));
    assert_eq!(
        store.option("General", "timeout").unwrap(),
        Some(Value::scalar("42"))
    );
}

/// CONTRACT: An unsafe hostname never selects a file.
#[test]
fn contract_unsafe_host_falls_back_to_default() {
    let env = TestEnv::with_global(GLOBAL_INI);
    let store = env
        .lenient_store()
        .with_host_resolver(FixedHost::new("../global"));

    assert_eq!(store.local_path(), env.config_path("config.ini"));
}

/// CONTRACT: Forcing a hostname switches files and empties the local layer.
#[test]
fn contract_force_hostname_switches_local_file() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    let mut store = env.lenient_store();
    store.load().unwrap();
    assert!(!store.local_document().is_empty());

    let path = store.force_hostname("x.example.com").unwrap();

    assert_eq!(path, env.config_path("x.example.com.config.ini"));
    assert_eq!(store.local_path(), path.as_path());
    assert!(store.local_document().is_empty());
    assert!(!store.global_document().is_empty());
}

/// CONTRACT: An invalid forced hostname changes nothing.
#[test]
fn contract_force_invalid_hostname_is_rejected() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    let mut store = env.store();
    store.load().unwrap();

    let err = store.force_hostname("../../etc/passwd").unwrap_err();

    assert!(matches!(err, StoreError::InvalidHostname { .. }));
    assert_eq!(store.local_path(), env.config_path("config.ini"));
    assert!(store.is_initialized());
    assert!(!store.local_document().is_empty());
}

/// CONTRACT: Saving after forcing a hostname writes the per-host file only.
#[test]
fn contract_save_after_force_writes_host_file() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.lenient_store();

    store.force_hostname("x.example.com").unwrap();
    store.set_option("General", "timeout", "7").unwrap();
    store.save().unwrap();

    assert_eq!(env.read_config("config.ini").unwrap(), "");
    let host_file = env.read_config("x.example.com.config.ini").unwrap();
    assert!(host_file.contains("timeout = 7"));
}

/// CONTRACT: Strict mode accepts a forced host file that does not exist yet.
#[test]
fn contract_force_hostname_in_strict_mode() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.store();
    store.section("General").unwrap();

    store.force_hostname("x.example.com").unwrap();
    store.set_option("General", "timeout", "30").unwrap();
    assert!(store.save().unwrap().was_written());

    let host_file = env.read_config("x.example.com.config.ini").unwrap();
    assert!(host_file.contains("[General]\ntimeout = 30\n"));
    assert_eq!(env.read_config("config.ini").unwrap(), "");
}
