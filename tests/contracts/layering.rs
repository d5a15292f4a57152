//! Contracts for merging defaults with local overrides.

use crate::common::*;
use inistack::{StoreError, Value};

/// CONTRACT: With an empty local layer, a section reads as its defaults.
#[test]
fn contract_defaults_without_local_overrides() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.store();

    let general = store.section("General").unwrap();

    assert_eq!(general.get("timeout"), Some(&Value::scalar("5")));
    assert_eq!(general.get("name"), Some(&Value::scalar("My Site")));
}

/// CONTRACT: A local value replaces the default key by key.
#[test]
fn contract_local_overrides_default() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    let mut store = env.store();

    let general = store.section("General").unwrap();

    assert_eq!(general.get("timeout"), Some(&Value::scalar("10")));
    assert_eq!(general.get("name"), Some(&Value::scalar("My Site")));
    assert_eq!(general.get("enabled").and_then(Value::as_bool), Some(true));
}

/// CONTRACT: A local list replaces the default list as a whole.
#[test]
fn contract_local_list_replaces_default_list() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "[Plugins]\nPlugins[] = \"C\"\n");
    let mut store = env.store();

    let plugins = store.section("Plugins").unwrap();

    assert_eq!(plugins.get("Plugins"), Some(&Value::list(["C"])));
}

/// CONTRACT: Sections defined only locally are readable.
#[test]
fn contract_local_only_section_is_readable() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "[Custom]\nflag = on\n");
    let mut store = env.store();

    assert!(store.has_section("Custom").unwrap());
    assert_eq!(
        store.option("Custom", "flag").unwrap(),
        Some(Value::scalar("on"))
    );
}

/// CONTRACT: Reading a section neither layer defines is an error.
#[test]
fn contract_undefined_section_errors() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.store();

    let err = store.section("Nope").unwrap_err();

    assert!(matches!(err, StoreError::UndefinedSection { ref name } if name == "Nope"));
}

/// CONTRACT: A missing global file is fatal in strict mode.
#[test]
fn contract_missing_global_is_fatal_in_strict_mode() {
    let env = TestEnv::new();
    let mut store = env.store();

    let err = store.load().unwrap_err();

    assert!(matches!(err, StoreError::ConfigFileNotFound { .. }));
    assert!(!store.is_initialized());
}

/// CONTRACT: Lenient mode degrades missing files to empty documents.
#[test]
fn contract_lenient_mode_tolerates_missing_files() {
    let env = TestEnv::new();
    let mut store = env.lenient_store();

    store.load().unwrap();

    assert!(store.is_initialized());
    assert!(store.global_document().is_empty());
    assert!(!store.has_section("General").unwrap());
}
