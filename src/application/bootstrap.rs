//! One-call setup for hosts that keep their config on disk

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ConfigStore;
use crate::config::StoreSettings;
use crate::infrastructure::LocalFs;

/// Open the layered configuration of the installation at `root`.
///
/// Settings come from `<root>/inistack.toml` and INISTACK_* variables. Both
/// files are read eagerly so a missing global file surfaces here rather
/// than on first access.
pub fn open(root: &Path) -> Result<ConfigStore<LocalFs>> {
    let settings = StoreSettings::load_or_default(root);
    let mut store = settings.build_store();

    store.load().with_context(|| {
        format!(
            "Failed to load configuration under {}",
            settings.config_paths().config_dir().display()
        )
    })?;

    tracing::debug!(
        global = %store.global_path().display(),
        local = %store.local_path().display(),
        mode = ?store.error_mode(),
        "configuration store opened"
    );
    Ok(store)
}
