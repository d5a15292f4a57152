//! Scenario: an administrator tunes a fresh installation.

use crate::common::*;
use inistack::{SaveOutcome, Value};

/// SCENARIO: change a value, save, restart, save again.
///
/// The first save writes the override; the second save finds nothing to do.
#[test]
fn scenario_change_timeout_then_idle_save() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");

    let mut store = env.store();
    let general = store.section("General").unwrap();
    assert_eq!(general.get("timeout"), Some(&Value::scalar("5")));

    store.set_option("General", "timeout", "10").unwrap();
    assert!(store.save().unwrap().was_written());
    let first = env.read_config("config.ini").unwrap();
    assert!(first.contains("[General]\ntimeout = 10\n"));

    // Fresh process
    let mut store = env.store();
    assert_eq!(
        store.option("General", "timeout").unwrap(),
        Some(Value::scalar("10"))
    );
    assert_eq!(store.save().unwrap(), SaveOutcome::Unchanged);
    assert_eq!(env.read_config("config.ini").unwrap(), first);
}

/// SCENARIO: shrink a plugin list, then restore the default.
#[test]
fn scenario_plugin_list_round_trip() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", "");

    let mut store = env.store();
    assert_eq!(
        store.option("Plugins", "Plugins").unwrap(),
        Some(Value::list(["A", "B"]))
    );

    store
        .set_option("Plugins", "Plugins", Value::list(["A"]))
        .unwrap();
    store.save().unwrap();
    let written = env.read_config("config.ini").unwrap();
    assert!(written.contains("[Plugins]\nPlugins[] = \"A\"\n"));
    assert!(!written.contains("\"B\""));

    let mut store = env.store();
    assert_eq!(
        store.option("Plugins", "Plugins").unwrap(),
        Some(Value::list(["A"]))
    );
    store
        .set_option("Plugins", "Plugins", Value::list(["A", "B"]))
        .unwrap();
    assert!(store.save().unwrap().was_written());
    assert!(!env.read_config("config.ini").unwrap().contains("[Plugins]"));
}

/// SCENARIO: preview a save, then reset the site to defaults.
#[test]
fn scenario_preview_then_reset() {
    let env = TestEnv::with_global(GLOBAL_INI);
    env.write_config("config.ini", LOCAL_TIMEOUT_10);

    let mut store = env.store();
    store.set_option("Mail", "transport", "sendmail").unwrap();

    let diff = store.preview_save().unwrap().unwrap();
    assert!(diff.has_changes);
    assert!(diff
        .changed_lines()
        .iter()
        .any(|line| line.content.contains("transport = \"sendmail\"")));
    // Previewing does not write.
    assert_eq!(env.read_config("config.ini").unwrap(), LOCAL_TIMEOUT_10);

    assert!(store.delete_local().unwrap());
    assert!(!env.local_exists());

    let mut store = env.lenient_store();
    assert_eq!(
        store.option("General", "timeout").unwrap(),
        Some(Value::scalar("5"))
    );
}

/// SCENARIO: the host application boots through `open`.
#[test]
fn scenario_open_from_settings_file() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.root().join("etc")).unwrap();
    std::fs::write(env.root().join("etc/global.ini"), GLOBAL_INI).unwrap();
    std::fs::write(
        env.root().join("inistack.toml"),
        "[paths]\nconfig_dir = \"etc\"\n\n[errors]\nmode = \"lenient\"\n",
    )
    .unwrap();

    let mut store = inistack::open(env.root()).unwrap();
    store.set_option("General", "timeout", "15").unwrap();
    store.save().unwrap();

    let local = std::fs::read_to_string(env.root().join("etc/config.ini")).unwrap();
    assert!(local.contains("timeout = 15"));
}
