//! Contracts for saving the local override file.

use crate::common::*;
use inistack::{SaveOutcome, Section, Value};

/// CONTRACT: Saving writes only values that differ from the defaults.
#[test]
fn contract_save_writes_minimal_overrides() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.store();

    let mut general = store.section("General").unwrap();
    general.insert("timeout", "10");
    store.set_section("General", general);

    assert!(store.save().unwrap().was_written());

    let written = env.read_config("config.ini").unwrap();
    assert!(written.contains("[General]\ntimeout = 10\n"));
    assert!(!written.contains("name"));
    assert!(!written.contains("[Plugins]"));
}

/// CONTRACT: A save with nothing changed does not touch the file.
#[test]
fn contract_clean_save_is_skipped() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    let mut store = env.store();

    store.section("General").unwrap();
    store.section("Plugins").unwrap();

    assert_eq!(store.save().unwrap(), SaveOutcome::Unchanged);
    assert_eq!(env.read_config("config.ini").unwrap(), LOCAL_TIMEOUT_10);
}

/// CONTRACT: Overrides of sections never read survive a save.
#[test]
fn contract_unread_overrides_survive_save() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "[Mail]\ntransport = \"sendmail\"\n");
    let mut store = env.store();

    store.set_option("General", "timeout", "30").unwrap();
    store.save().unwrap();

    let mut reloaded = env.store();
    assert_eq!(
        reloaded.option("Mail", "transport").unwrap(),
        Some(Value::scalar("sendmail"))
    );
    assert_eq!(
        reloaded.option("General", "timeout").unwrap(),
        Some(Value::scalar("30"))
    );
}

/// CONTRACT: Setting a value back to its default removes the override.
#[test]
fn contract_reverting_to_default_drops_override() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);
    let mut store = env.store();

    store.set_option("General", "timeout", "5").unwrap();
    assert!(store.save().unwrap().was_written());

    let written = env.read_config("config.ini").unwrap();
    assert!(!written.contains("[General]"));
    assert!(written.starts_with(inistack::codec::HEADER));
}

/// CONTRACT: The store is cleared by save; the next read comes from disk.
#[test]
fn contract_save_clears_store() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let mut store = env.store();

    store.set_section("Extra", Section::new().with("k", "v"));
    store.save().unwrap();

    assert!(!store.is_initialized());
    assert_eq!(
        store.local_section("Extra").unwrap(),
        Some(Section::new().with("k", "v"))
    );
}

/// CONTRACT: A failed write surfaces as ConfigFileNotWritable.
#[cfg(unix)]
#[test]
fn contract_unwritable_local_file_errors() {
    use std::os::unix::fs::PermissionsExt;

    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");
    let config_dir = env.root().join("config");
    std::fs::set_permissions(&config_dir, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Root ignores directory permissions; nothing to assert there.
    let probe = config_dir.join(".probe");
    if std::fs::write(&probe, "").is_ok() {
        let _ = std::fs::remove_file(&probe);
        std::fs::set_permissions(&config_dir, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let mut store = env.store();
    store.set_option("General", "timeout", "10").unwrap();
    let err = store.save().unwrap_err();

    std::fs::set_permissions(&config_dir, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(
        err,
        inistack::StoreError::ConfigFileNotWritable { ref path }
            if path == std::path::Path::new("config/config.ini")
    ));
    assert!(store.is_initialized());
}
